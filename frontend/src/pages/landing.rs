use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::analytics::{ConversionEvent, Tracker};
use crate::campaign::Campaign;
use crate::components::countdown::CountdownTimer;
use crate::components::registration_form::{RegistrationForm, FORM_ANCHOR};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub campaign: Campaign,
}

fn scroll_to_form() {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(FORM_ANCHOR));
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let tracker = use_context::<Tracker>().unwrap_or_default();
    let campaign = &props.campaign;
    let copy = &campaign.copy;

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

    let on_cta = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            tracker.track(ConversionEvent::CtaClick);
            scroll_to_form();
        })
    };

    let on_video = Callback::from(move |_: MouseEvent| {
        tracker.track(ConversionEvent::VideoView);
    });

    html! {
        <div class="landing">
            <div class="landing__ribbon">
                <span>{copy.ribbon}</span>
            </div>

            <section class="hero">
                <div class="hero__headline">
                    <h1>{copy.headline[0]}</h1>
                    <h2 class="hero__accent">{copy.headline[1]}</h2>
                    <h3>{copy.headline[2]}</h3>
                </div>

                <div class="hero__pitch">
                    { for copy.pitch.iter().map(|line| html! { <p>{*line}</p> }) }
                </div>

                <button class="cta-button" onclick={on_cta}>
                    {copy.submit_idle}
                </button>

                <div class="hero__details">
                    <div class="hero__date">
                        <span class="hero__icon">{"📅"}</span>
                        <span>{copy.date_label}</span>
                    </div>
                    <div class="hero__schedule">
                        { for copy.schedule.iter().map(|slot| html! {
                            <div><span class="hero__icon">{"🕒"}</span>{*slot}</div>
                        }) }
                    </div>
                </div>

                if let Some(starts_at) = campaign.starts_at() {
                    <CountdownTimer starts_at={starts_at} />
                }
            </section>

            <section class="video">
                <div class="video__header">
                    <h2>{copy.video_title}</h2>
                    <p>{copy.video_subtitle}</p>
                </div>
                <div class="video__frame" onclick={on_video}>
                    <iframe
                        src={campaign.video_url}
                        title={copy.video_title}
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        allowfullscreen={true}
                    />
                </div>
                <div class="video__footer">
                    <span>{copy.video_footer}</span>
                </div>
            </section>

            <RegistrationForm campaign={campaign.clone()} />

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #6b21a8 0%, #581c87 50%, #3b0764 100%);
                    color: #ffffff;
                    overflow-x: hidden;
                    font-family: system-ui, -apple-system, sans-serif;
                }

                .landing__ribbon {
                    position: absolute;
                    top: 0;
                    right: 0;
                    transform: rotate(45deg) translate(5rem, -2.5rem);
                    background: linear-gradient(to right, #f97316, #ea580c);
                    padding: 0.75rem 4rem;
                    font-weight: 700;
                    font-size: 0.875rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                }

                .hero {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 6rem 1rem 4rem;
                    text-align: center;
                }

                .hero__headline h1,
                .hero__headline h2,
                .hero__headline h3 {
                    font-size: clamp(3rem, 8vw, 6rem);
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                    font-weight: 300;
                }

                .hero__accent {
                    color: #f97316;
                    font-weight: 700 !important;
                }

                .hero__pitch p {
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    margin: 0 0 0.5rem;
                }

                .hero__pitch p:last-child {
                    font-weight: 700;
                }

                .cta-button,
                .registration__submit {
                    background: linear-gradient(to right, #f97316, #ea580c);
                    color: #ffffff;
                    font-weight: 700;
                    border: none;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .cta-button {
                    margin: 3rem 0;
                    padding: 1rem 3rem;
                    font-size: 1.5rem;
                    border-radius: 9999px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                }

                .cta-button:hover,
                .registration__submit:hover:not(:disabled) {
                    transform: scale(1.05);
                }

                .hero__details {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 1.5rem;
                    font-size: 1.125rem;
                }

                .hero__date {
                    font-weight: 700;
                }

                .hero__icon {
                    color: #f97316;
                    margin-right: 0.75rem;
                }

                .countdown {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 3rem;
                }

                .countdown__cell {
                    display: flex;
                    flex-direction: column;
                    min-width: 4.5rem;
                    padding: 0.75rem;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                }

                .countdown__value {
                    font-size: 2rem;
                    font-weight: 700;
                }

                .countdown__unit {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    opacity: 0.8;
                }

                .countdown--live {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #f97316;
                }

                .video {
                    background: #111827;
                    padding: 4rem 1rem;
                    text-align: center;
                }

                .video__header h2 {
                    font-size: clamp(1.875rem, 5vw, 3rem);
                    margin-bottom: 1.5rem;
                }

                .video__header p,
                .video__footer {
                    color: #d1d5db;
                    font-size: 1.25rem;
                }

                .video__frame {
                    max-width: 64rem;
                    margin: 2rem auto;
                    aspect-ratio: 16 / 9;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #000000;
                    cursor: pointer;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .video__frame iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }

                .video__footer span {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #f97316, #ea580c);
                    color: #ffffff;
                    font-weight: 600;
                }

                .registration {
                    background: #ffffff;
                    color: #1f2937;
                    padding: 4rem 1rem;
                }

                .registration__inner {
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .registration__header {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .registration__header h2 {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .registration__header p {
                    color: #4b5563;
                    font-size: 1.25rem;
                }

                .registration__form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .registration__form input {
                    padding: 1rem 1.5rem;
                    font-size: 1.125rem;
                    background: #f9fafb;
                    border: 2px solid #e5e7eb;
                    border-radius: 0.75rem;
                    outline: none;
                }

                .registration__form input:focus {
                    border-color: #f97316;
                    background: #ffffff;
                }

                .registration__form input:disabled,
                .registration__submit:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .registration__submit {
                    padding: 1.25rem 2rem;
                    font-size: 1.25rem;
                    border-radius: 0.75rem;
                }

                .registration__error {
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: #fef2f2;
                    border: 2px solid #fecaca;
                    color: #991b1b;
                }

                .registration__success {
                    text-align: center;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: #f0fdf4;
                    border: 2px solid #bbf7d0;
                    color: #166534;
                }

                .registration__success-icon {
                    font-size: 3.75rem;
                    margin-bottom: 1rem;
                }

                .registration__privacy {
                    margin-top: 2rem;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 4rem 1rem 3rem;
                    }
                    .cta-button {
                        font-size: 1.25rem;
                        padding: 1rem 2rem;
                    }
                    .countdown__cell {
                        min-width: 3.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
