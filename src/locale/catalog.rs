//! Chrome strings for the landing section and the portfolio page.
//!
//! Project content (titles, tags, case studies) lives in
//! [`crate::content`]; this catalog only holds the text around it.
//!
//! ## Adding a string
//!
//! 1. Add a variant to [`Text`]
//! 2. Add its `(es, en)` pair to `Text::pair()`

use super::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    // Landing highlight section
    HighlightEyebrow,
    HighlightHeading,
    HighlightIntro,
    HighlightFooter,
    ContactCta,
    FullPortfolioCta,
    LandingTitle,
    LandingDescription,

    // Portfolio page
    PortfolioHeading,
    PortfolioIntro,
    PortfolioTitle,
    PortfolioDescription,
    RequestCase,
    RequestCaseSubject,
    ViewDetails,
    ViewLess,

    // Case study headings
    Stack,
    Integrations,
    Challenges,
    Solution,
    Impact,

    // Filter bar
    FilterAll,
    FilterEcom,
    FilterPersonal,
    FilterServices,

    /// Label of the link that switches to the other language.
    SwitchLanguage,
}

impl Text {
    /// Text for the given locale.
    pub fn get(self, locale: Locale) -> &'static str {
        let (es, en) = self.pair();
        locale.pick(es, en)
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Text::HighlightEyebrow => ("Portafolio", "Portfolio"),
            Text::HighlightHeading => ("Algunos resultados recientes", "Recent work & results"),
            Text::HighlightIntro => (
                "Sitios a medida para real estate, logística, gaming, suplementos y turismo náutico. Diseño limpio, SEO técnico y rendimiento listo para escalar.",
                "Custom sites for real estate, logistics, gaming, supplements and boat rentals. Clean design, technical SEO and performance ready to scale.",
            ),
            Text::HighlightFooter => (
                "En el portfolio completo podés ver más casos, métricas y detalles del proceso.",
                "In the full portfolio you can see more projects, metrics and process details.",
            ),
            Text::ContactCta => ("Hablemos de tu proyecto", "Let's talk about your project"),
            Text::FullPortfolioCta => ("Ver portfolio completo", "View full portfolio"),
            Text::LandingTitle => ("Opalo · Desarrollo web a medida", "Opalo · Custom web development"),
            Text::LandingDescription => (
                "Sitios rápidos y a medida para marcas, e‑commerce y servicios.",
                "Fast, custom websites for brands, e‑commerce and services.",
            ),
            Text::PortfolioHeading => ("Portafolio", "Portfolio"),
            Text::PortfolioIntro => (
                "Casos seleccionados de e‑commerce, marca personal y servicios.",
                "Selected work across e‑commerce, personal brands and services.",
            ),
            Text::PortfolioTitle => ("Portafolio · Opalo", "Portfolio · Opalo"),
            Text::PortfolioDescription => (
                "Casos de estudio: stack, integraciones, retos, solución e impacto de cada proyecto.",
                "Case studies: stack, integrations, challenges, solution and impact for each project.",
            ),
            Text::RequestCase => ("Solicitar caso detallado", "Request detailed case"),
            Text::RequestCaseSubject => ("Solicitud de caso detallado", "Request detailed case"),
            Text::ViewDetails => ("Ver más", "View details"),
            Text::ViewLess => ("Ver menos", "View less"),
            Text::Stack => ("Stack", "Stack"),
            Text::Integrations => ("Integraciones", "Integrations"),
            Text::Challenges => ("Retos", "Challenges"),
            Text::Solution => ("Solución", "Solution"),
            Text::Impact => ("Impacto", "Impact"),
            Text::FilterAll => ("Todos", "All"),
            Text::FilterEcom => ("E‑commerce", "E‑commerce"),
            Text::FilterPersonal => ("Personal", "Personal"),
            Text::FilterServices => ("Servicios", "Services"),
            Text::SwitchLanguage => ("English", "Español"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_by_locale() {
        assert_eq!(Text::ViewDetails.get(Locale::Es), "Ver más");
        assert_eq!(Text::ViewDetails.get(Locale::En), "View details");
        assert_eq!(Text::Impact.get(Locale::En), "Impact");
    }

    #[test]
    fn switch_label_names_the_other_language() {
        assert_eq!(Text::SwitchLanguage.get(Locale::Es), "English");
        assert_eq!(Text::SwitchLanguage.get(Locale::En), "Español");
    }
}
