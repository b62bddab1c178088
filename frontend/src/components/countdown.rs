use chrono::{DateTime, FixedOffset, Utc};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub started: bool,
}

impl Countdown {
    pub fn until(start: DateTime<FixedOffset>, now: DateTime<Utc>) -> Self {
        let remaining = start.with_timezone(&Utc) - now;
        let total = remaining.num_seconds();
        if total <= 0 {
            return Self {
                started: true,
                ..Self::default()
            };
        }
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            started: false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub starts_at: DateTime<FixedOffset>,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownProps) -> Html {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with_deps(move |_| {
            let interval_handle = Rc::new(RefCell::new(Some(Interval::new(1_000, move || {
                now.set(Utc::now());
            }))));

            move || {
                if let Some(interval) = interval_handle.borrow_mut().take() {
                    drop(interval);
                }
            }
        }, ());
    }

    let left = Countdown::until(props.starts_at, *now);
    if left.started {
        return html! {
            <div class="countdown countdown--live">{"¡El webinar ya comenzó!"}</div>
        };
    }

    let cell = |value: i64, unit: &str| html! {
        <div class="countdown__cell">
            <span class="countdown__value">{format!("{:02}", value)}</span>
            <span class="countdown__unit">{unit.to_string()}</span>
        </div>
    };

    html! {
        <div class="countdown">
            {cell(left.days, "días")}
            {cell(left.hours, "horas")}
            {cell(left.minutes, "min")}
            {cell(left.seconds, "seg")}
        </div>
    }
}
