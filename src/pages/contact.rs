use yew::prelude::*;

use crate::motion::reveal::{Reveal, STAGGER_STEP_MS};

#[function_component(Contact)]
pub fn contact() -> Html {
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
        <div class="contact-page">
            <div class="contact-content">
                <Reveal class="contact-header">
                    <h1 class="contact-title">{"Let's Connect"}</h1>
                    <p class="contact-subtitle">
                        {"Schedule a consultation to explore how Simr can transform your business with AI automation"}
                    </p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal class="contact-info">
                        <h3 class="info-title">{"Book Your Appointment"}</h3>
                        <p class="info-text">
                            {"Select a date from the calendar to schedule your consultation. \
                              Our team will reach out to confirm your preferred time slot."}
                        </p>

                        <div class="contact-details">
                            <div class="detail-item">
                                <div class="detail-label">{"Email"}</div>
                                <div class="detail-value">{"hello@simr.ai"}</div>
                            </div>
                            <div class="detail-item">
                                <div class="detail-label">{"Phone"}</div>
                                <div class="detail-value">{"+1 (555) 123-4567"}</div>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal class="calendar-wrapper" delay_ms={STAGGER_STEP_MS}>
                        // Placeholder only: the booking widget has no logic yet
                        <div class="calendar-placeholder">
                            <div class="calendar-icon">{"✨"}</div>
                            <p>{"Calendar functionality coming soon"}</p>
                            <p class="calendar-note">{"Select your preferred date for consultation"}</p>
                        </div>
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                    .contact-page {
                        min-height: 100vh;
                        background: #080a12;
                        color: #fff;
                        padding: 8rem 2rem 4rem;
                    }
                    .contact-content {
                        max-width: 1000px;
                        margin: 0 auto;
                    }
                    .contact-header {
                        text-align: center;
                        margin-bottom: 3.5rem;
                    }
                    .contact-title {
                        font-size: 3rem;
                        font-weight: 800;
                        margin: 0 0 1rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .contact-subtitle {
                        font-size: 1.15rem;
                        color: #aab4c8;
                        max-width: 620px;
                        margin: 0 auto;
                        line-height: 1.6;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        align-items: stretch;
                    }
                    .contact-info {
                        padding: 2.5rem;
                        border: 1px solid rgba(126, 178, 255, 0.15);
                        border-radius: 16px;
                        background: rgba(14, 18, 30, 0.85);
                    }
                    .info-title {
                        font-size: 1.5rem;
                        margin: 0 0 1rem;
                    }
                    .info-text {
                        color: #aab4c8;
                        line-height: 1.6;
                        margin: 0 0 2rem;
                    }
                    .contact-details {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .detail-label {
                        font-size: 0.85rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        color: #7EB2FF;
                        margin-bottom: 0.25rem;
                    }
                    .detail-value {
                        font-size: 1.1rem;
                    }
                    .calendar-wrapper {
                        display: flex;
                    }
                    .calendar-placeholder {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 2.5rem;
                        border: 1px dashed rgba(126, 178, 255, 0.35);
                        border-radius: 16px;
                        background: rgba(126, 178, 255, 0.05);
                        color: #aab4c8;
                    }
                    .calendar-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .calendar-note {
                        font-size: 0.9rem;
                        color: #6d7890;
                    }
                    @media (max-width: 768px) {
                        .contact-page {
                            padding-top: 6rem;
                        }
                        .contact-title {
                            font-size: 2.2rem;
                        }
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
