//! Deck model and markdown loader.
//!
//! A deck file is plain markdown: an optional leading `# ` line names
//! the deck, each `## ` heading starts a slide, and a
//! `<!-- demo -->` / `<!-- demo: steering text -->` line inside a slide
//! marks it as carrying a live generation widget.

use std::path::Path;

use deck_common::{DemoSpec, SlideInfo};
use tracing::info;

use crate::error::DeckError;

/// An ordered, fixed-length sequence of slides. Immutable for the
/// lifetime of a session; `len() >= 1` holds by construction.
#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    slides: Vec<SlideInfo>,
}

impl Deck {
    pub async fn load(path: &Path) -> Result<Self, DeckError> {
        let text = tokio::fs::read_to_string(path).await?;
        let deck = Self::parse(&text)?;
        info!(
            path = %path.display(),
            slides = deck.len(),
            demos = deck.demo_count(),
            "deck loaded"
        );
        Ok(deck)
    }

    pub fn parse(text: &str) -> Result<Self, DeckError> {
        let mut title = String::new();
        let mut slides: Vec<SlideInfo> = Vec::new();
        let mut current: Option<SlideBuilder> = None;

        for line in text.lines() {
            if let Some(heading) = line.strip_prefix("## ") {
                if let Some(builder) = current.take() {
                    slides.push(builder.finish());
                }
                current = Some(SlideBuilder::new(heading.trim()));
            } else if let Some(deck_title) = line.strip_prefix("# ") {
                if title.is_empty() {
                    title = deck_title.trim().to_string();
                }
            } else if let Some(builder) = current.as_mut() {
                builder.push_line(line);
            }
        }
        if let Some(builder) = current.take() {
            slides.push(builder.finish());
        }

        if slides.is_empty() {
            if title.is_empty() {
                return Err(DeckError::Empty);
            }
            // A title-only file still presents as a single title slide.
            slides.push(SlideInfo {
                title: title.clone(),
                body: String::new(),
                demo: None,
            });
        }

        Ok(Self { title, slides })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[SlideInfo] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&SlideInfo> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn demo_count(&self) -> usize {
        self.slides.iter().filter(|slide| slide.demo.is_some()).count()
    }
}

struct SlideBuilder {
    title: String,
    body: Vec<String>,
    demo: Option<DemoSpec>,
}

impl SlideBuilder {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: Vec::new(),
            demo: None,
        }
    }

    fn push_line(&mut self, line: &str) {
        if let Some(spec) = parse_demo_directive(line) {
            self.demo = Some(spec);
        } else {
            self.body.push(line.to_string());
        }
    }

    fn finish(self) -> SlideInfo {
        SlideInfo {
            title: self.title,
            body: self.body.join("\n").trim().to_string(),
            demo: self.demo,
        }
    }
}

fn parse_demo_directive(line: &str) -> Option<DemoSpec> {
    let inner = line
        .trim()
        .strip_prefix("<!--")?
        .strip_suffix("-->")?
        .trim();
    let rest = inner.strip_prefix("demo")?;
    if rest.is_empty() {
        return Some(DemoSpec { instruction: None });
    }
    let instruction = rest.strip_prefix(':')?.trim();
    Some(DemoSpec {
        instruction: (!instruction.is_empty()).then(|| instruction.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Automation Workshop

## Welcome
Opening notes.

## Try It Yourself
<!-- demo: You are a concise research assistant. -->
Type a prompt and press Enter.

## Wrap Up
Thanks for coming.
";

    #[test]
    fn test_parse_splits_slides_on_headings() {
        let deck = Deck::parse(SAMPLE).unwrap();
        assert_eq!(deck.title(), "Automation Workshop");
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slides()[0].title, "Welcome");
        assert_eq!(deck.slides()[0].body, "Opening notes.");
        assert_eq!(deck.slides()[2].title, "Wrap Up");
    }

    #[test]
    fn test_demo_directive_is_extracted_and_stripped() {
        let deck = Deck::parse(SAMPLE).unwrap();
        assert_eq!(deck.demo_count(), 1);

        let demo_slide = &deck.slides()[1];
        let demo = demo_slide.demo.as_ref().unwrap();
        assert_eq!(
            demo.instruction.as_deref(),
            Some("You are a concise research assistant.")
        );
        assert!(!demo_slide.body.contains("<!--"));
    }

    #[test]
    fn test_bare_demo_directive_has_no_instruction() {
        let deck = Deck::parse("## Demo\n<!-- demo -->\ntext\n").unwrap();
        let demo = deck.slides()[0].demo.as_ref().unwrap();
        assert!(demo.instruction.is_none());
    }

    #[test]
    fn test_unrelated_comments_stay_in_body() {
        let deck = Deck::parse("## One\n<!-- note to self -->\n").unwrap();
        assert!(deck.slides()[0].demo.is_none());
        assert_eq!(deck.slides()[0].body, "<!-- note to self -->");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(Deck::parse(""), Err(DeckError::Empty)));
        assert!(matches!(Deck::parse("just prose\n"), Err(DeckError::Empty)));
    }

    #[test]
    fn test_title_only_file_becomes_single_slide() {
        let deck = Deck::parse("# Lonely Title\n").unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].title, "Lonely Title");
    }
}
