//! Advisory text segmentation
//!
//! The advisory call is asked to answer under four fixed bracketed
//! headers. Segmentation walks the text line by line as a small state
//! machine: a line naming a header switches the current section, every
//! other non-blank line accrues to whichever section is current, and
//! lines before the first header are dropped.

use std::fmt;

/// The four sections an advisory response is asked to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceSection {
    MarketAppeal,
    StylingStrategy,
    CatalogCopy,
    SocialMediaHook,
}

impl AdviceSection {
    /// All sections, in prompt order
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::MarketAppeal,
            Self::StylingStrategy,
            Self::CatalogCopy,
            Self::SocialMediaHook,
        ]
    }

    /// The bracketed header this section is announced by
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::MarketAppeal => "[MARKET APPEAL]",
            Self::StylingStrategy => "[STYLING STRATEGY]",
            Self::CatalogCopy => "[CATALOG COPY]",
            Self::SocialMediaHook => "[SOCIAL MEDIA HOOK]",
        }
    }

    /// Detect which section, if any, a line announces
    ///
    /// Matching is case-insensitive and tolerates surrounding decoration,
    /// since models occasionally restyle the headers.
    fn announced_by(line: &str) -> Option<Self> {
        let upper = line.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|section| upper.contains(section.header()))
    }
}

impl fmt::Display for AdviceSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MarketAppeal => "Market Appeal",
            Self::StylingStrategy => "Styling Strategy",
            Self::CatalogCopy => "Catalog Copy",
            Self::SocialMediaHook => "Social Media Hook",
        };
        write!(f, "{name}")
    }
}

/// Segmented advisory text; absent sections were not present in the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceSections {
    pub market_appeal: Option<String>,
    pub styling_strategy: Option<String>,
    pub catalog_copy: Option<String>,
    pub social_media_hook: Option<String>,
}

impl AdviceSections {
    /// Content of one section
    #[must_use]
    pub fn get(&self, section: AdviceSection) -> Option<&str> {
        match section {
            AdviceSection::MarketAppeal => self.market_appeal.as_deref(),
            AdviceSection::StylingStrategy => self.styling_strategy.as_deref(),
            AdviceSection::CatalogCopy => self.catalog_copy.as_deref(),
            AdviceSection::SocialMediaHook => self.social_media_hook.as_deref(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        AdviceSection::all()
            .iter()
            .all(|section| self.get(*section).is_none())
    }

    fn push(&mut self, section: AdviceSection, line: &str) {
        let slot = match section {
            AdviceSection::MarketAppeal => &mut self.market_appeal,
            AdviceSection::StylingStrategy => &mut self.styling_strategy,
            AdviceSection::CatalogCopy => &mut self.catalog_copy,
            AdviceSection::SocialMediaHook => &mut self.social_media_hook,
        };
        match slot {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(line);
            }
            None => *slot = Some(line.to_string()),
        }
    }
}

/// Split advisory text into its four sections
#[must_use]
pub fn segment_advice(text: &str) -> AdviceSections {
    let mut sections = AdviceSections::default();
    let mut current: Option<AdviceSection> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(section) = AdviceSection::announced_by(line) {
            current = Some(section);
        } else if let (Some(section), false) = (current, line.is_empty()) {
            sections.push(section, line);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Here is my analysis.

[MARKET APPEAL]
Young professionals who value understated luxury.

[STYLING STRATEGY]
**Footwear:** Pointed leather loafers.
**Accessories:** A slim gold watch.

[CATALOG COPY]
A timeless silhouette in washed silk.
Cut for movement, finished by hand.

[SOCIAL MEDIA HOOK]
Effortless never looked this intentional. #silkseason";

    #[test]
    fn test_all_sections_captured() {
        let sections = segment_advice(SAMPLE);
        assert_eq!(
            sections.market_appeal.as_deref(),
            Some("Young professionals who value understated luxury.")
        );
        assert_eq!(
            sections.styling_strategy.as_deref(),
            Some("**Footwear:** Pointed leather loafers.\n**Accessories:** A slim gold watch.")
        );
        assert_eq!(
            sections.catalog_copy.as_deref(),
            Some("A timeless silhouette in washed silk.\nCut for movement, finished by hand.")
        );
        assert_eq!(
            sections.social_media_hook.as_deref(),
            Some("Effortless never looked this intentional. #silkseason")
        );
    }

    #[test]
    fn test_text_before_first_header_is_dropped() {
        let sections = segment_advice(SAMPLE);
        for section in AdviceSection::all() {
            if let Some(content) = sections.get(*section) {
                assert!(!content.contains("Here is my analysis."));
            }
        }
    }

    #[test]
    fn test_no_cross_contamination_between_sections() {
        let sections = segment_advice(SAMPLE);
        assert!(!sections.market_appeal.as_deref().unwrap().contains("Footwear"));
        assert!(!sections
            .catalog_copy
            .as_deref()
            .unwrap()
            .contains("#silkseason"));
    }

    #[test]
    fn test_missing_header_leaves_section_absent() {
        let sections = segment_advice("[MARKET APPEAL]\nEveryone will want this.");
        assert!(sections.market_appeal.is_some());
        assert!(sections.styling_strategy.is_none());
        assert!(sections.catalog_copy.is_none());
        assert!(sections.social_media_hook.is_none());
    }

    #[test]
    fn test_decorated_and_lowercased_headers_still_match() {
        let sections = segment_advice("## [market appeal] ##\nBroad appeal.");
        assert_eq!(sections.market_appeal.as_deref(), Some("Broad appeal."));
    }

    #[test]
    fn test_repeated_header_appends() {
        let text = "[CATALOG COPY]\nFirst line.\n[CATALOG COPY]\nSecond line.";
        let sections = segment_advice(text);
        assert_eq!(
            sections.catalog_copy.as_deref(),
            Some("First line.\nSecond line.")
        );
    }

    #[test]
    fn test_headerless_text_yields_nothing() {
        assert!(segment_advice("just prose with no structure").is_empty());
        assert!(segment_advice("").is_empty());
    }
}
