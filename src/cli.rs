//! Interactive prompt loops behind the `assess` and `classify` subcommands.
//!
//! Both loops are generic over their input and output so they can be driven
//! by stdin/stdout or by in-memory buffers.

use anyhow::{bail, Context};
use std::io::{BufRead, Write};

use addiscreen_core::{FeatureVector, LabeledDataset};
use addiscreen_dataset::normalize_answer;
use addiscreen_similarity::{predict, ClassificationResult, KeywordSentiment, Sentiment};

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    Ok((read > 0).then_some(line))
}

/// Ask every feature column as a yes/no question, then print the prediction.
pub fn run_assessment<R, W>(
    dataset: &LabeledDataset,
    mut input: R,
    mut output: W,
) -> anyhow::Result<ClassificationResult>
where
    R: BufRead,
    W: Write,
{
    let features = dataset.features();
    writeln!(output, "Answer the following questions with Yes or No:\n")?;

    let mut answers = Vec::with_capacity(features.len());
    for (_, label) in features.labels() {
        loop {
            write!(output, "{}: ", label)?;
            output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                bail!("input closed after {} of {} questions", answers.len(), features.len());
            };
            match normalize_answer(&line) {
                Some(flag) => {
                    answers.push(flag == 1);
                    break;
                }
                None => writeln!(output, "Please answer 'Yes' or 'No'.")?,
            }
        }
    }

    let query = FeatureVector::from_answers(features.clone(), &answers)?;
    let result = predict(&query, dataset)?;
    write_report(&mut output, &result)?;

    Ok(result)
}

fn format_similarity(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "n/a".to_string(),
    }
}

/// Print prediction results in the CLI report format
pub fn write_report<W: Write>(output: &mut W, result: &ClassificationResult) -> std::io::Result<()> {
    writeln!(output, "\n--- Prediction Results ---")?;
    writeln!(output, "Predicted addiction class: {}", result.predicted_label)?;
    writeln!(output, "Predicted addiction percentage: {}%", result.percent_display())?;

    writeln!(output, "\nDebug Info (optional):")?;
    writeln!(
        output,
        "Similarity with Addicted group: {}",
        format_similarity(result.similarity.addicted)
    )?;
    writeln!(
        output,
        "Similarity with Not Addicted group: {}",
        format_similarity(result.similarity.not_addicted)
    )?;
    Ok(())
}

/// Classify lines of text until `quit` or end of input.
///
/// Returns the number of texts classified.
pub fn run_classifier<R, W>(scorer: &KeywordSentiment, mut input: R, mut output: W) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Keyword-based Text Classifier")?;
    writeln!(output, "Enter text to classify (1=good, 0=bad). Type 'quit' to exit.\n")?;

    let mut classified = 0;
    loop {
        write!(output, "Enter text: ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let text = line.trim_end_matches(['\r', '\n']);
        if text.eq_ignore_ascii_case("quit") {
            break;
        }

        let prediction: Sentiment = scorer.predict_text(text);
        writeln!(output, "Prediction: {} ({})\n", prediction.as_u8(), prediction)?;
        classified += 1;
    }

    Ok(classified)
}
