use chrono::{DateTime, FixedOffset};
use std::time::Duration;

use crate::config;

/// Everything that differs between webinar builds of the landing page.
#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    /// Stored verbatim in every lead's `event` column.
    pub event: &'static str,
    /// Scheduled start, RFC 3339 with the organizer's offset.
    pub date: &'static str,
    /// How long the success panel stays before the form comes back.
    pub reset_delay: Duration,
    pub video_url: &'static str,
    pub copy: CampaignCopy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignCopy {
    pub ribbon: &'static str,
    pub headline: [&'static str; 3],
    pub pitch: &'static [&'static str],
    pub date_label: &'static str,
    pub schedule: &'static [&'static str],
    pub video_title: &'static str,
    pub video_subtitle: &'static str,
    pub video_footer: &'static str,
    pub form_title: &'static str,
    pub form_subtitle: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub submit_idle: &'static str,
    pub submit_busy: &'static str,
    pub submit_done: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub error_prefix: &'static str,
    pub privacy_note: &'static str,
    pub registration_name: &'static str,
}

pub const MVP_WEBINAR: Campaign = Campaign {
    event: "Webinar MVP - Eduardo Escalante",
    date: "2024-08-19T11:00:00-04:00",
    reset_delay: Duration::from_millis(5_000),
    video_url: "https://www.youtube.com/embed/yK6NY7Jkg8s",
    copy: CampaignCopy {
        ribbon: "Evento 100% Online - Cupos limitados",
        headline: ["¿Sigues postergando", "tu idea", "de negocio?"],
        pitch: &[
            "Te invito a este webinar gratuito",
            "donde te muestro cómo crear tu MVP",
            "y empezar a vender en solo 4 semanas,",
            "sin ser programador y sin gastar una fortuna.",
        ],
        date_label: "Sábado 19 de agosto",
        schedule: &[
            "11:00 AM Chile, Argentina, Uruguay",
            "10:00 AM Perú, Colombia, Ecuador, Bolivia",
            "9:00 AM México",
        ],
        video_title: "📱 Mira esta historia real sobre crear productos digitales",
        video_subtitle: "Descubre cómo el No-Code está transformando la manera de crear negocios",
        video_footer: "▶️ En el webinar verás cómo tú también puedes hacerlo",
        form_title: "Reserva tu lugar ahora",
        form_subtitle: "Es 100% gratuito y solo tomará 30 segundos",
        name_placeholder: "Tu nombre completo",
        email_placeholder: "Tu mejor email",
        submit_idle: "RESERVA TU LUGAR AHORA",
        submit_busy: "⏳ RESERVANDO TU LUGAR...",
        submit_done: "✅ LUGAR RESERVADO",
        success_title: "¡Lugar reservado exitosamente!",
        success_body: "Te enviaremos todos los detalles de acceso por email.",
        error_prefix: "No pudimos reservar tu lugar:",
        privacy_note: "🔒 Tus datos están seguros. No compartimos tu información.",
        registration_name: "Webinar MVP Registration",
    },
};

impl Campaign {
    /// The campaign this build ships, with any build-time overrides applied.
    pub fn active() -> Self {
        let mut campaign = MVP_WEBINAR;
        if let Some(delay) = config::reset_delay_override() {
            campaign.reset_delay = delay;
        }
        campaign
    }

    pub fn starts_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date).ok()
    }
}
