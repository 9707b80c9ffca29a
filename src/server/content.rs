//! Static marketing content rendered by the page templates.
//!
//! Fields suffixed `_html` hold trusted inline markup (`<strong>`, `<i>`)
//! and are emitted unescaped.

pub struct ModelStep {
    pub number: &'static str,
    pub title: &'static str,
    pub body_html: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct PlanFeature {
    pub text: &'static str,
    pub emphasized: bool,
}

pub struct PricingPlan {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    /// Rendered after the price, e.g. "/mo".
    pub period: Option<&'static str>,
    pub features: &'static [PlanFeature],
    pub cta: &'static str,
    /// Dark card variant.
    pub dark: bool,
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer_html: &'static str,
}

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const MODEL_STEPS: &[ModelStep] = &[
    ModelStep {
        number: "01",
        title: "The Problem: Volatility Decay",
        body_html: "If SPY drops 10%, a 3x ETF drops 30%. To get back to even, the 3x ETF needs a 43% gain. In sideways \"choppy\" markets, this mathematical drag destroys portfolios.",
    },
    ModelStep {
        number: "02",
        title: "The Solution: Regime Scanning",
        body_html: "We monitor VIX term structure and realized volatility. When \"High Volatility\" is detected, the model triggers a <strong>Cash Signal</strong>, sitting out the chop.",
    },
    ModelStep {
        number: "03",
        title: "The Result: Pure Trends",
        body_html: "We only re-enter SPXL/SSO when the regime stabilizes. This allows us to participate in the powerful 3x upside of bull markets, without suffering the 3x downside of crashes.",
    },
    ModelStep {
        number: "04",
        title: "Deep Predictors",
        body_html: "Our engine ingests 14 distinct market features, including Dark Pool Index (DPI), Gamma Exposure (GEX), and Yield Curve spreads, to paint a complete picture of market health.",
    },
    ModelStep {
        number: "05",
        title: "Machine Learning Core",
        body_html: "A supervised Random Forest classifier, trained on 20 years of tick-level data, dynamically weighs these predictors to identify probability skews that human traders miss.",
    },
    ModelStep {
        number: "06",
        title: "The Signal",
        body_html: "The output is binary and unequivocal: <strong>1 (Long)</strong> or <strong>0 (Cash)</strong>. There is no hedging, no confusion, and no discretion. Just pure execution.",
    },
];

/// Highlighted stat shown above the secondary stats row.
pub const HEADLINE_STAT: Stat = Stat {
    value: "42.5%",
    label: "Backtested CAGR",
};

pub const SECONDARY_STATS: &[Stat] = &[
    Stat {
        value: "2.1",
        label: "Profit Factor",
    },
    Stat {
        value: "-15%",
        label: "Max Drawdown",
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Professional Signal",
        tagline: "For independent traders.",
        price: "$299",
        period: Some("/mo"),
        features: &[
            PlanFeature { text: "Daily Signals (SPXL & SSO)", emphasized: false },
            PlanFeature { text: "7:00 AM Pre-market Alerts", emphasized: false },
            PlanFeature { text: "Live Dashboard Access", emphasized: false },
            PlanFeature { text: "Position Sizing Calculator", emphasized: false },
            PlanFeature { text: "Private Community Access", emphasized: false },
        ],
        cta: "Start 14-Day Trial",
        dark: false,
    },
    PricingPlan {
        name: "Enterprise Code",
        tagline: "For developers & prop desks.",
        price: "Custom",
        period: None,
        features: &[
            PlanFeature { text: "Everything in Professional", emphasized: true },
            PlanFeature { text: "Low-Latency API (FIX/JSON)", emphasized: false },
            PlanFeature { text: "Full Source Code", emphasized: true },
            PlanFeature { text: "Parameter Optimization Engine", emphasized: false },
            PlanFeature { text: "On-Prem Docker Deployment", emphasized: false },
            PlanFeature { text: "Developer Support", emphasized: false },
        ],
        cta: "Contact Sales",
        dark: true,
    },
];

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Do you manage my money?",
        answer_html: "<strong>No.</strong> Benchmark3x is a software provider and financial publisher. We provide data signals. You execute the trades in your own brokerage account. We never touch your funds.",
    },
    FaqItem {
        question: "Is this financial advice?",
        answer_html: "No. Our signals are based on mathematical models and historical backtesting. They are for educational and informational purposes only. You must evaluate if 3x leverage fits your personal risk tolerance.",
    },
    FaqItem {
        question: "How do I place the trades?",
        answer_html: "Most subscribers receive our email/SMS alert at 7:00 AM ET and place a simple \"Market On Open\" order in their brokerage app. It takes less than 60 seconds a day. Enterprise clients can automate this via API.",
    },
    FaqItem {
        question: "Why use SPXL (3x) instead of SPY?",
        answer_html: "In low-volatility bull markets, SPXL offers superior alpha. The risk is the drawdown. Our model acts as a \"safety switch,\" allowing you to hold the 3x asset only when conditions are mathematically favorable.",
    },
    FaqItem {
        question: "What happens if I miss a signal?",
        answer_html: "The strategy is designed for \"swing trading\" trends, not high-frequency scalping. Missing an entry by a few minutes or even an hour rarely impacts long-term performance significantly.",
    },
    FaqItem {
        question: "Is the code actually provided?",
        answer_html: "For Enterprise License holders, yes. We provide the full source code, allowing you to audit the strategy logic on your own infrastructure. We believe in \"Glass Box\" transparency, not Black Box secrets.",
    },
    FaqItem {
        question: "Can I use this in an IRA or Roth IRA?",
        answer_html: "Yes. SPXL and SSO are standard Exchange Traded Funds (ETFs) available in almost all self-directed retirement accounts. They do not require margin accounts or special permissions to trade.",
    },
    FaqItem {
        question: "What brokerages are supported?",
        answer_html: "Because we provide the signals (and not the execution), you can use any major brokerage including Fidelity, Charles Schwab, E*TRADE, Interactive Brokers, or Robinhood.",
    },
    FaqItem {
        question: "Is there a specific cancellation policy?",
        answer_html: "Yes. You can cancel your monthly subscription at any time with one click from your dashboard. You will retain access until the end of your current billing cycle. There are no long-term contracts for the Professional plan.",
    },
    FaqItem {
        question: "Does the model short the market?",
        answer_html: "No. The model is \"Long Only.\" It switches between being invested in the ETF (SPXL/SSO) or sitting in Cash. We do not use inverse ETFs (like SPXU) or short selling, which reduces the risk of \"whipsaw\" losses significantly.",
    },
];

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "Terms of Service", href: "#" },
    FooterLink { label: "Privacy Policy", href: "#" },
    FooterLink { label: "Risk Disclosure", href: "#" },
];

pub const DISCLAIMER_HTML: &[&str] = &[
    "<strong>IMPORTANT DISCLAIMER:</strong> Benchmark3x is a software application and research tool. We are not a registered investment advisor, broker-dealer, or financial analyst. The information presented is for educational purposes only and does not constitute financial advice.",
    "Hypothetical or simulated performance results have certain limitations. Unlike an actual performance record, simulated results do not represent actual trading. Also, since the trades have not been executed, the results may have under-or-over compensated for the impact, if any, of certain market factors, such as lack of liquidity. Trading leveraged ETFs involves substantial risk of loss.",
];

/// Shown after the sign-in form is submitted. No credentials are checked.
pub const SIGN_IN_ACKNOWLEDGMENT: &str =
    "Thanks! Member sign-in is not open yet. We'll email you when your dashboard is ready.";
