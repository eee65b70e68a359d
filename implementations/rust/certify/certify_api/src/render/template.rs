//! Selection of the decorative template variant of a certificate.

use serde::Serialize;

use crate::render::shapes::{BottomBar, TopBar};

/// The closed set of category codes with a dedicated certificate design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryCode {
    Default,
    Participation,
    Completion,
    Achievement,
    Volunteer,
    Speaker,
}

/// Everything a category code decides about the look of a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariant {
    pub top_bar: TopBar,
    pub bottom_bar: BottomBar,
    pub subtitle: &'static str,
    pub accent: &'static str,
}

impl CategoryCode {
    pub const ALL: [CategoryCode; 6] = [
        CategoryCode::Default,
        CategoryCode::Participation,
        CategoryCode::Completion,
        CategoryCode::Achievement,
        CategoryCode::Volunteer,
        CategoryCode::Speaker,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CategoryCode::Default => "default",
            CategoryCode::Participation => "participation",
            CategoryCode::Completion => "completion",
            CategoryCode::Achievement => "achievement",
            CategoryCode::Volunteer => "volunteer",
            CategoryCode::Speaker => "speaker",
        }
    }

    /// Total mapping from an optional raw code to a known category.
    ///
    /// Codes are compared after trimming, ignoring ASCII case. Absent and
    /// unknown codes select [`CategoryCode::Default`].
    pub fn from_code(code: Option<&str>) -> CategoryCode {
        let Some(code) = code.map(str::trim) else {
            return CategoryCode::Default;
        };
        Self::ALL
            .into_iter()
            .find(|known| known.code().eq_ignore_ascii_case(code))
            .unwrap_or(CategoryCode::Default)
    }

    pub fn variant(&self) -> TemplateVariant {
        let (top_bar, bottom_bar, subtitle, accent) = match self {
            CategoryCode::Default => {
                (TopBar::Angled, BottomBar::Angled, "of Appreciation", "#ff9800")
            }
            CategoryCode::Participation => {
                (TopBar::Wave, BottomBar::Wave, "of Participation", "#ff9800")
            }
            CategoryCode::Completion => {
                (TopBar::Ribbon, BottomBar::Ribbon, "of Completion", "#2e9d5b")
            }
            CategoryCode::Achievement => {
                (TopBar::Chevron, BottomBar::Chevron, "of Achievement", "#d4a017")
            }
            CategoryCode::Volunteer => {
                (TopBar::Arc, BottomBar::Wave, "of Volunteering", "#e0457b")
            }
            CategoryCode::Speaker => {
                (TopBar::Chevron, BottomBar::Ribbon, "of Recognition", "#3b82f6")
            }
        };
        TemplateVariant {
            top_bar,
            bottom_bar,
            subtitle,
            accent,
        }
    }
}

impl TemplateVariant {
    /// The variant for a raw, optional category code
    pub fn select(code: Option<&str>) -> TemplateVariant {
        CategoryCode::from_code(code).variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn absent_code_selects_the_default() {
        assert_eq!(CategoryCode::from_code(None), CategoryCode::Default);
        assert_eq!(TemplateVariant::select(None), CategoryCode::Default.variant());
    }

    #[test]
    fn known_codes_are_matched_loosely() {
        assert_eq!(
            CategoryCode::from_code(Some(" Participation ")),
            CategoryCode::Participation
        );
        assert_eq!(CategoryCode::from_code(Some("SPEAKER")), CategoryCode::Speaker);
    }

    #[test]
    fn every_known_code_round_trips_through_its_text() {
        for category in CategoryCode::ALL {
            assert_eq!(CategoryCode::from_code(Some(category.code())), category);
        }
    }

    #[test]
    fn default_variant_uses_angled_bars() {
        let variant = CategoryCode::Default.variant();
        assert_eq!(variant.top_bar, TopBar::Angled);
        assert_eq!(variant.bottom_bar, BottomBar::Angled);
        assert_eq!(variant.subtitle, "of Appreciation");
    }

    proptest! {
        #[test]
        fn unknown_codes_fall_through_to_default(code in "\\PC{0,24}") {
            let known = CategoryCode::ALL
                .iter()
                .any(|c| c.code().eq_ignore_ascii_case(code.trim()));
            prop_assume!(!known);
            prop_assert_eq!(CategoryCode::from_code(Some(code.as_str())), CategoryCode::Default);
            prop_assert_eq!(TemplateVariant::select(Some(code.as_str())), TemplateVariant::select(Some("default")));
        }

        #[test]
        fn a_known_code_always_gets_the_same_bar_pair(index in 0usize..6, upper in any::<bool>()) {
            let category = CategoryCode::ALL[index];
            let code = if upper { category.code().to_uppercase() } else { category.code().to_string() };
            let first = TemplateVariant::select(Some(code.as_str()));
            let second = TemplateVariant::select(Some(category.code()));
            prop_assert_eq!(first.top_bar, second.top_bar);
            prop_assert_eq!(first.bottom_bar, second.bottom_bar);
            prop_assert_eq!(first, category.variant());
        }
    }
}
