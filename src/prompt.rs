use std::fmt;

/// Ordinal labels the model is asked to pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Likelihood {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Likelihood {
    pub const ALL: [Likelihood; 5] = [
        Likelihood::VeryLow,
        Likelihood::Low,
        Likelihood::Medium,
        Likelihood::High,
        Likelihood::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Likelihood::VeryLow => "Very Low",
            Likelihood::Low => "Low",
            Likelihood::Medium => "Medium",
            Likelihood::High => "High",
            Likelihood::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const ARTICLE_MARKER: &str = "News Article to Analyze:";

/// Article used by the CLI when no input is given.
pub const EXAMPLE_ARTICLE: &str = "The Reserve Bank of India's Monetary Policy Committee announced on Friday that it would keep the key repo rate unchanged at 6.5%, citing persistent inflationary pressures and global economic uncertainties. Governor Shaktikanta Das emphasized the central bank's commitment to achieving its inflation target while supporting sustainable growth. Analysts had widely anticipated the decision, with many noting the need for continued vigilance.";

/// Connectivity check prompt for `smoke`.
pub const SMOKE_PROMPT: &str = "Tell me a short story about a cat and a mouse who became friends.";

const CRITERIA: [(&str, &str); 6] = [
    (
        "Factual Claims & Verifiability",
        "Does the article make strong factual claims? Are these claims supported by evidence or verifiable sources?",
    ),
    (
        "Source Credibility",
        "Are the sources cited (if any) generally considered reputable? Is the source of the article itself known for factual reporting or for spreading misinformation?",
    ),
    (
        "Tone and Language",
        "Is the language used objective and neutral, or is it highly emotional, inflammatory, or overly opinionated? Look for buzzwords, hyperbolic statements, or appeals to emotion rather than logic.",
    ),
    (
        "Headline-Body Consistency",
        "Does the headline accurately reflect the content of the article, or is it clickbait designed to mislead?",
    ),
    (
        "Logical Coherence",
        "Is the narrative consistent? Are there contradictions or illogical jumps in reasoning?",
    ),
    (
        "Grammar and Style",
        "Are there unusual grammatical errors, typos, or an unprofessional writing style that might indicate a lack of editorial oversight?",
    ),
];

/// Builds the detection prompt. The article is embedded verbatim, without
/// escaping, between the article marker and a closing `---` line.
pub fn fake_news_detection_prompt(article_text: &str) -> String {
    let criteria = CRITERIA
        .iter()
        .enumerate()
        .map(|(i, (title, question))| format!("{}.  **{}:** {}", i + 1, title, question))
        .collect::<Vec<_>>()
        .join("\n");
    let labels = Likelihood::ALL
        .iter()
        .map(|likelihood| format!("\"{}\"", likelihood))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an AI assistant specialized in identifying potential misinformation and biased content in news articles. Your goal is to critically analyze the provided article for signs of fakery, sensationalism, or misleading information.

Consider the following aspects during your analysis:
{criteria}

Based on your analysis, provide:
-   A 'Likelihood of Fake News' assessment (choose one: {labels}).
-   A confidence score (0-100%) for your assessment.
-   A concise explanation (2-3 sentences) detailing the *primary reasons* for your assessment, referencing the criteria above.
-   Any specific examples from the article that support your reasoning.

---
{ARTICLE_MARKER}
{article_text}
---

Your analysis:
"
    )
}
