use yew::prelude::*;
use yew_router::prelude::*;

use crate::motion::ambient::FloatingOrbs;
use crate::motion::reveal::{Reveal, RevealGroup};
use crate::motion::typing::TypedText;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-background">
                    <div class="neural-grid"></div>
                    <FloatingOrbs />
                </div>

                <div class="hero-content">
                    <div class="hero-badge">
                        {"✨ Next-Gen AI Automation"}
                    </div>

                    <h1 class="hero-title">
                        <TypedText text="Automate the Future" />
                        <span class="gradient-text">{" with AI"}</span>
                    </h1>

                    <p class="hero-subtitle">
                        {"Transform your business with intelligent automation solutions that scale effortlessly. \
                          We design, build, and deploy AI systems that revolutionize how you work."}
                    </p>

                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Contact} classes="forward-link">
                            <button class="cta-primary">{"Book a Consultation →"}</button>
                        </Link<Route>>
                        <button class="cta-secondary">{"Learn More"}</button>
                    </div>

                    <RevealGroup class="hero-stats" item_class="stat-item">
                        <>
                            <div class="stat-number">{"10x"}</div>
                            <div class="stat-label">{"Faster Processing"}</div>
                        </>
                        <>
                            <div class="stat-number">{"95%"}</div>
                            <div class="stat-label">{"Cost Reduction"}</div>
                        </>
                        <>
                            <div class="stat-number">{"24/7"}</div>
                            <div class="stat-label">{"Autonomous Operation"}</div>
                        </>
                    </RevealGroup>
                </div>
            </section>

            <section class="services">
                <Reveal class="section-header">
                    <h2 class="section-title">{"What We Do"}</h2>
                    <p class="section-subtitle">
                        {"Comprehensive AI automation solutions designed to elevate your business to new heights"}
                    </p>
                </Reveal>

                // Each card is a direct child so the group staggers them by index
                <RevealGroup class="services-grid" item_class="service-slot">
                    <div class="service-card">
                        <div class="service-icon">{"🧠"}</div>
                        <h3 class="service-title">{"Intelligent Automation"}</h3>
                        <p class="service-description">
                            {"Leverage cutting-edge AI to automate complex business processes and workflows with unprecedented accuracy."}
                        </p>
                    </div>
                    <div class="service-card">
                        <div class="service-icon">{"🔁"}</div>
                        <h3 class="service-title">{"Workflow Optimization"}</h3>
                        <p class="service-description">
                            {"Transform your operations with smart automation that learns and adapts to your business needs in real-time."}
                        </p>
                    </div>
                    <div class="service-card">
                        <div class="service-icon">{"📊"}</div>
                        <h3 class="service-title">{"Data Intelligence"}</h3>
                        <p class="service-description">
                            {"Harness the power of AI-driven analytics to extract actionable insights from your data and drive informed decisions."}
                        </p>
                    </div>
                    <div class="service-card">
                        <div class="service-icon">{"⚡"}</div>
                        <h3 class="service-title">{"Lightning-Fast Integration"}</h3>
                        <p class="service-description">
                            {"Seamlessly integrate AI capabilities into your existing systems with our plug-and-play automation solutions."}
                        </p>
                    </div>
                    <div class="service-card">
                        <div class="service-icon">{"🖥️"}</div>
                        <h3 class="service-title">{"Custom AI Models"}</h3>
                        <p class="service-description">
                            {"Deploy tailored AI models specifically designed for your industry and business requirements."}
                        </p>
                    </div>
                    <div class="service-card">
                        <div class="service-icon">{"✨"}</div>
                        <h3 class="service-title">{"Process Innovation"}</h3>
                        <p class="service-description">
                            {"Reimagine your business processes with AI-powered solutions that unlock new levels of efficiency and innovation."}
                        </p>
                    </div>
                </RevealGroup>
            </section>

            <section class="closing-cta">
                <Reveal class="closing-cta-content">
                    <h2>{"Ready to Transform Your Business?"}</h2>
                    <p>{"Let's discuss how AI automation can revolutionize your operations"}</p>
                    <Link<Route> to={Route::Contact} classes="forward-link">
                        <button class="cta-primary">{"Get Started Today →"}</button>
                    </Link<Route>>
                </Reveal>
            </section>

            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background: #080a12;
                        color: #fff;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 2rem 4rem;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 0;
                    }
                    .neural-grid {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        background-image:
                            linear-gradient(rgba(126, 178, 255, 0.06) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(126, 178, 255, 0.06) 1px, transparent 1px);
                        background-size: 48px 48px;
                        mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
                        -webkit-mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 860px;
                        text-align: center;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.5rem 1.2rem;
                        border: 1px solid rgba(126, 178, 255, 0.35);
                        border-radius: 999px;
                        background: rgba(126, 178, 255, 0.08);
                        color: #7EB2FF;
                        font-size: 0.9rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-title {
                        font-size: 3.8rem;
                        font-weight: 800;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                        min-height: 1.1em;
                    }
                    .gradient-text {
                        background: linear-gradient(45deg, #7EB2FF, #9D7BFF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .typing-cursor {
                        color: #7EB2FF;
                        animation: cursor-blink 1s step-end infinite;
                    }
                    @keyframes cursor-blink {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0; }
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #aab4c8;
                        line-height: 1.6;
                        max-width: 640px;
                        margin: 0 auto 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 3.5rem;
                    }
                    .forward-link {
                        text-decoration: none;
                    }
                    .cta-primary {
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(45deg, #4d8dff, #7EB2FF);
                        color: #061021;
                        font-size: 1.05rem;
                        font-weight: 700;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .cta-primary:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(77, 141, 255, 0.35);
                    }
                    .cta-secondary {
                        padding: 0.9rem 2rem;
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        border-radius: 10px;
                        background: transparent;
                        color: #fff;
                        font-size: 1.05rem;
                        cursor: pointer;
                        transition: border-color 0.3s ease, color 0.3s ease;
                    }
                    .cta-secondary:hover {
                        border-color: #7EB2FF;
                        color: #7EB2FF;
                    }
                    .hero-stats {
                        display: flex;
                        justify-content: center;
                        gap: 3rem;
                    }
                    .stat-item {
                        text-align: center;
                    }
                    .stat-item + .stat-item {
                        border-left: 1px solid rgba(255, 255, 255, 0.12);
                        padding-left: 3rem;
                    }
                    .stat-number {
                        font-size: 2.2rem;
                        font-weight: 800;
                        color: #7EB2FF;
                    }
                    .stat-label {
                        font-size: 0.95rem;
                        color: #aab4c8;
                        margin-top: 0.25rem;
                    }
                    .services {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 3.5rem;
                    }
                    .section-title {
                        font-size: 2.6rem;
                        font-weight: 800;
                        margin: 0 0 1rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .section-subtitle {
                        font-size: 1.15rem;
                        color: #aab4c8;
                        max-width: 600px;
                        margin: 0 auto;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .service-card {
                        height: 100%;
                        padding: 2rem;
                        border: 1px solid rgba(126, 178, 255, 0.15);
                        border-radius: 16px;
                        background: rgba(14, 18, 30, 0.85);
                        transition: border-color 0.3s ease, transform 0.3s ease;
                    }
                    .service-card:hover {
                        border-color: rgba(126, 178, 255, 0.5);
                        transform: translateY(-4px);
                    }
                    .service-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .service-title {
                        font-size: 1.3rem;
                        margin: 0 0 0.75rem;
                        color: #fff;
                    }
                    .service-description {
                        font-size: 1rem;
                        color: #aab4c8;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .closing-cta {
                        padding: 6rem 2rem 8rem;
                    }
                    .closing-cta-content {
                        max-width: 760px;
                        margin: 0 auto;
                        text-align: center;
                        padding: 4rem 2rem;
                        border-radius: 24px;
                        border: 1px solid rgba(126, 178, 255, 0.2);
                        background: radial-gradient(ellipse at top, rgba(126, 178, 255, 0.12), rgba(14, 18, 30, 0.9));
                    }
                    .closing-cta-content h2 {
                        font-size: 2.4rem;
                        margin: 0 0 1rem;
                    }
                    .closing-cta-content p {
                        font-size: 1.15rem;
                        color: #aab4c8;
                        margin: 0 0 2rem;
                    }
                    @media (max-width: 950px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.6rem;
                        }
                        .hero-cta-group {
                            flex-direction: column;
                            align-items: center;
                        }
                        .hero-stats {
                            flex-direction: column;
                            gap: 1.5rem;
                        }
                        .stat-item + .stat-item {
                            border-left: none;
                            padding-left: 0;
                        }
                        .services-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
