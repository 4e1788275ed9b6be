use chrono::{TimeZone, Utc};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use crate::models::scan_models::ScalpAnalysis;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LEFT_MARGIN: f32 = 20.0;
const BOTTOM_MARGIN: f32 = 20.0;
const TOP_START: f32 = PAGE_HEIGHT - 20.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * LEFT_MARGIN;

const BLACK: (u8, u8, u8) = (0, 0, 0);
const GREY: (u8, u8, u8) = (100, 100, 100);
const LIGHT_GREY: (u8, u8, u8) = (128, 128, 128);
const GREEN: (u8, u8, u8) = (34, 197, 94);
const BLUE: (u8, u8, u8) = (59, 130, 246);
const PURPLE: (u8, u8, u8) = (168, 85, 247);
const RED: (u8, u8, u8) = (239, 68, 68);

const DISCLAIMER: &str = "Disclaimer: This analysis is for informational purposes only and is \
not a substitute for professional medical advice. Please consult a dermatologist for proper \
diagnosis and treatment.";

/// Score banding shared with the dashboard: green from 80, yellow from 60,
/// orange from 40, red below.
pub fn score_color(score: i32) -> (u8, u8, u8) {
    if score >= 80 {
        GREEN
    } else if score >= 60 {
        (234, 179, 8)
    } else if score >= 40 {
        (249, 115, 22)
    } else {
        RED
    }
}

/// Greedy word wrap on an estimated character budget. Helvetica averages
/// about half the point size per glyph, which is close enough for report
/// prose.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn max_chars_for(font_size: f32, width: f32) -> usize {
    // mm to pt, then roughly half the font size per character
    ((width * 2.8346) / (font_size * 0.5)).max(8.0) as usize
}

struct ReportWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl ReportWriter {
    fn new() -> Result<Self, printpdf::Error> {
        let (doc, page, layer) = PdfDocument::new(
            "Scalp Health Analysis Report",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let oblique = doc.add_builtin_font(BuiltinFont::HelveticaOblique)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            y: TOP_START,
            regular,
            bold,
            oblique,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = TOP_START;
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < BOTTOM_MARGIN {
            self.new_page();
        }
    }

    fn set_color(&self, (r, g, b): (u8, u8, u8)) {
        self.layer.set_fill_color(Color::Rgb(Rgb::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            None,
        )));
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef, indent: f32, advance: f32) {
        self.ensure_space(advance);
        self.layer
            .use_text(text, size, Mm(LEFT_MARGIN + indent), Mm(self.y), font);
        self.y -= advance;
    }

    fn wrapped(&mut self, text: &str, size: f32, font: &IndirectFontRef, indent: f32, advance: f32) {
        let budget = max_chars_for(size, CONTENT_WIDTH - indent);
        let lines = wrap_text(text, budget);
        for wrapped_line in &lines {
            self.ensure_space(advance);
            self.layer
                .use_text(wrapped_line.as_str(), size, Mm(LEFT_MARGIN + indent), Mm(self.y), font);
            self.y -= advance;
        }
    }

    fn gap(&mut self, amount: f32) {
        self.y -= amount;
    }

    fn routine_block(&mut self, heading: &str, color: (u8, u8, u8), items: &[String]) {
        self.ensure_space(14.0);
        self.set_color(color);
        let bold = self.bold.clone();
        self.line(heading, 12.0, &bold, 0.0, 6.0);
        self.set_color(GREY);
        let regular = self.regular.clone();
        for item in items {
            self.wrapped(&format!("• {}", item), 10.0, &regular, 5.0, 5.0);
        }
        self.gap(3.0);
    }

    fn checklist(&mut self, heading: &str, color: (u8, u8, u8), items: &[String]) {
        self.ensure_space(16.0);
        self.set_color(color);
        let bold = self.bold.clone();
        self.line(heading, 14.0, &bold, 0.0, 8.0);
        self.set_color(GREY);
        let regular = self.regular.clone();
        for item in items {
            self.wrapped(&format!("• {}", item), 10.0, &regular, 5.0, 5.0);
        }
        self.gap(5.0);
    }
}

/// Renders the analysis as a multi-page A4 report: header, colored health
/// score, detected conditions, causes, recommendations, routine, do's and
/// don'ts, then the disclaimer on its own page.
pub fn render_report(analysis: &ScalpAnalysis, generated_at: i64) -> Result<Vec<u8>, printpdf::Error> {
    let mut w = ReportWriter::new()?;
    let regular = w.regular.clone();
    let bold = w.bold.clone();
    let oblique = w.oblique.clone();

    w.set_color(BLACK);
    w.line("Scalp Health Analysis Report", 24.0, &bold, 0.0, 15.0);

    let generated = match Utc.timestamp_opt(generated_at, 0) {
        chrono::offset::LocalResult::Single(dt) => dt.format("%B %d, %Y %H:%M UTC").to_string(),
        _ => "unknown".to_string(),
    };
    w.set_color(LIGHT_GREY);
    w.line(&format!("Generated on: {}", generated), 10.0, &regular, 0.0, 15.0);

    w.set_color(BLACK);
    w.line("Health Score", 16.0, &bold, 0.0, 10.0);
    w.set_color(score_color(analysis.health_score));
    w.line(&format!("{}%", analysis.health_score), 32.0, &bold, 0.0, 12.0);

    if !analysis.overall_assessment.is_empty() {
        w.set_color(GREY);
        w.wrapped(&analysis.overall_assessment, 11.0, &regular, 0.0, 6.0);
        w.gap(8.0);
    }

    if !analysis.conditions.is_empty() {
        w.ensure_space(20.0);
        w.set_color(BLACK);
        w.line("Detected Conditions", 14.0, &bold, 0.0, 8.0);
        for condition in &analysis.conditions {
            w.ensure_space(12.0);
            w.set_color(BLACK);
            w.line(
                &format!("• {} ({})", condition.name, condition.severity),
                11.0,
                &bold,
                0.0,
                5.0,
            );
            w.set_color(GREY);
            w.wrapped(&condition.description, 11.0, &regular, 5.0, 5.0);
            w.gap(2.0);
        }
        w.gap(5.0);
    }

    if !analysis.causes.is_empty() {
        w.ensure_space(20.0);
        w.set_color(BLACK);
        w.line("Possible Causes", 14.0, &bold, 0.0, 8.0);
        for cause in &analysis.causes {
            w.ensure_space(12.0);
            w.set_color(BLACK);
            w.line(&format!("• {}", cause.category), 11.0, &bold, 0.0, 5.0);
            w.set_color(GREY);
            w.wrapped(&cause.description, 11.0, &regular, 5.0, 5.0);
            w.gap(2.0);
        }
        w.gap(5.0);
    }

    if !analysis.recommendations.is_empty() {
        w.ensure_space(20.0);
        w.set_color(BLACK);
        w.line("Recommendations", 14.0, &bold, 0.0, 8.0);
        for rec in &analysis.recommendations {
            w.ensure_space(14.0);
            w.set_color(BLACK);
            w.line(
                &format!("• {} ({})", rec.title, rec.kind.replace('_', " ")),
                11.0,
                &bold,
                0.0,
                5.0,
            );
            w.set_color(GREY);
            w.wrapped(&rec.description, 11.0, &regular, 5.0, 5.0);
            w.gap(2.0);
        }
        w.gap(5.0);
    }

    w.ensure_space(40.0);
    w.set_color(BLACK);
    w.line("Hair Care Routine", 14.0, &bold, 0.0, 10.0);
    w.routine_block("Daily:", GREEN, &analysis.hair_care_routine.daily);
    w.routine_block("Weekly:", BLUE, &analysis.hair_care_routine.weekly);
    w.routine_block("Monthly:", PURPLE, &analysis.hair_care_routine.monthly);
    w.gap(5.0);

    w.checklist("Do's", GREEN, &analysis.dos_and_donts.dos);
    w.checklist("Don'ts", RED, &analysis.dos_and_donts.donts);

    w.new_page();
    w.set_color(LIGHT_GREY);
    w.wrapped(DISCLAIMER, 10.0, &oblique, 0.0, 5.0);

    w.doc.save_to_bytes()
}

/// Download name in the original app's `scalp-analysis-YYYY-MM-DD.pdf` form.
pub fn report_file_name(generated_at: i64) -> String {
    let date = match Utc.timestamp_opt(generated_at, 0) {
        chrono::offset::LocalResult::Single(dt) => dt.format("%Y-%m-%d").to_string(),
        _ => "unknown-date".to_string(),
    };
    format!("scalp-analysis-{}.pdf", date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scan_models::{
        Cause, Condition, DosAndDonts, HairCareRoutine, Recommendation,
    };

    fn sample_analysis() -> ScalpAnalysis {
        ScalpAnalysis {
            health_score: 72,
            conditions: vec![Condition {
                name: "Dandruff".to_string(),
                severity: "mild".to_string(),
                description: "Light flaking concentrated near the crown, consistent with a dry scalp."
                    .to_string(),
            }],
            causes: vec![Cause {
                category: "lifestyle".to_string(),
                description: "Hot showers strip natural oils and dry the scalp out.".to_string(),
            }],
            recommendations: vec![Recommendation {
                kind: "home_remedy".to_string(),
                title: "Tea tree rinse".to_string(),
                description: "Dilute a few drops in carrier oil and massage in twice a week."
                    .to_string(),
            }],
            hair_care_routine: HairCareRoutine {
                daily: vec!["Brush gently before bed".to_string()],
                weekly: vec!["Deep condition".to_string()],
                monthly: vec!["Trim split ends".to_string()],
            },
            dos_and_donts: DosAndDonts {
                dos: vec!["Stay hydrated".to_string()],
                donts: vec!["Avoid very hot water".to_string()],
            },
            overall_assessment: "Generally healthy scalp with mild, treatable dryness.".to_string(),
        }
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = render_report(&sample_analysis(), 1_700_000_000).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn long_sections_spill_onto_extra_pages() {
        let mut analysis = sample_analysis();
        let filler = "A long recommendation line that has to wrap across the page repeatedly. ";
        analysis.recommendations = (0..40)
            .map(|i| Recommendation {
                kind: "lifestyle".to_string(),
                title: format!("Habit {}", i),
                description: filler.repeat(4),
            })
            .collect();
        let bytes = render_report(&analysis, 1_700_000_000).unwrap();
        let short_bytes = render_report(&sample_analysis(), 1_700_000_000).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // the overflowing sections must actually have been written out
        assert!(bytes.len() > short_bytes.len() * 2);
    }

    #[test]
    fn wrap_text_respects_budget_and_words() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap_text("", 10).is_empty());
        // words longer than the budget still land on their own line
        assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn score_bands_match_the_dashboard() {
        assert_eq!(score_color(92), GREEN);
        assert_eq!(score_color(65), (234, 179, 8));
        assert_eq!(score_color(45), (249, 115, 22));
        assert_eq!(score_color(10), RED);
    }

    #[test]
    fn file_name_uses_generation_date() {
        assert_eq!(report_file_name(0), "scalp-analysis-1970-01-01.pdf");
    }
}
