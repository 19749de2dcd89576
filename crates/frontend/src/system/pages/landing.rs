use crate::layout::footer::Footer;
use crate::routes::routes::INTAKE_PATH;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct Stat {
    value: &'static str,
    label: &'static str,
}

struct Step {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { value: "10k+", label: "Active Users" },
    Stat { value: "98%", label: "Match Accuracy" },
    Stat { value: "24h", label: "Alert Speed" },
];

// (icon, title)
const BENEFITS: [(&str, &str); 4] = [
    ("📅", "Up to 3 smart job alerts weekly"),
    ("📱", "Alerts via Email or WhatsApp"),
    ("🎯", "Matched to your CV or skills"),
    ("✨", "100% free, no gimmicks"),
];

const STEPS: [Step; 3] = [
    Step {
        icon: "📄",
        title: "Share Your Profile",
        text: "Upload your CV or list your key skills - it takes less than 2 minutes",
    },
    Step {
        icon: "🎯",
        title: "Smart Matching",
        text: "Our AI finds relevant jobs matching your experience and aspirations",
    },
    Step {
        icon: "📱",
        title: "Instant Alerts",
        text: "Get notified instantly when your dream job is posted",
    },
];

const COMPANIES: [&str; 4] = ["Google", "Microsoft", "Amazon", "Meta"];

/// Static marketing page. The only action is the link to the intake form.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-container">
            <div class="hero-wrapper">
                <header class="hero-section">
                    <div class="hero-content">
                        <h1>
                            <span class="hero-highlight">"Never Miss"</span>
                            <br />
                            "Your Dream Job Again"
                        </h1>
                        <p class="hero-text">
                            "Get personalized job alerts delivered straight to your WhatsApp and email. "
                            "Our AI matches your CV with the perfect opportunities."
                        </p>

                        <a href=INTAKE_PATH class="cta-button">
                            "Get Started - It's Free "
                            {icon("arrow-right")}
                        </a>

                        <div class="stats-bar">
                            {STATS
                                .iter()
                                .map(|stat| view! {
                                    <div class="stat">
                                        <span class="stat-number">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="benefits-section">
                        <div class="benefits-grid">
                            {BENEFITS
                                .iter()
                                .map(|(icon, title)| view! {
                                    <div class="benefit-item">
                                        <span class="benefit-icon">{*icon}</span>
                                        <h3>{*title}</h3>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </header>
            </div>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <div class="steps">
                    {STEPS
                        .iter()
                        .map(|step| view! {
                            <div class="step">
                                <div class="step-icon">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="trust-bar">
                <p>"Trusted by professionals from"</p>
                <div class="company-logos">
                    {COMPANIES
                        .iter()
                        .map(|company| view! { <div class="company">{*company}</div> })
                        .collect_view()}
                </div>
            </section>

            <Footer />
        </div>
    }
}
