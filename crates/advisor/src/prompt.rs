use common::MarketAnalysis;
use feed::Headline;

/// Assemble the model prompt from the local analysis and recent headlines.
///
/// The model is asked to comment on the deterministic read; it never
/// replaces the numbers.
pub fn build(pair: &str, analysis: &MarketAnalysis, headlines: &[Headline]) -> String {
    let mut prompt = format!(
        "You are a market analyst. The deterministic read on {pair} is: bias {}, {}. \
         Recommended levels: entry {}, tp1 {}, tp2 {}, sl {}. \
         {} order block(s) and {} fair value gap(s) detected.",
        analysis.bias,
        analysis.reasoning,
        analysis.recommended.entry,
        analysis.recommended.tp1,
        analysis.recommended.tp2,
        analysis.recommended.sl,
        analysis.zones.len(),
        analysis.gaps.len(),
    );

    if !headlines.is_empty() {
        prompt.push_str("\n\nRecent headlines:\n");
        for headline in headlines {
            prompt.push_str(&format!("- {} ({})\n", headline.title, headline.source));
        }
    }

    prompt.push_str(
        "\n\nIn two or three sentences, comment on this read. Do not restate the numbers.",
    );
    prompt
}
