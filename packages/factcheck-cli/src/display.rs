//! Styled console rendering of analysis reports.

use console::style;

use factcheck::{AnalysisReport, Verdict, VerdictRecord};

pub fn render_report(report: &AnalysisReport) {
    let rule = "=".repeat(80);
    println!("{rule}");
    println!(
        "{}",
        style("FACT-CHECKING REPORT (WITH EXTERNAL VERIFICATION)").bold()
    );
    println!("{rule}");
    println!("Article: {}", style(&report.title).bold());
    println!("URL: {}", report.url);
    println!("{rule}");

    println!("\n{}", style("SUMMARY").bold().underlined());
    println!("{}", report.summary);

    println!(
        "\n{} {}",
        style("OVERALL CONFIDENCE SCORE:").bold(),
        style(format!("{:.2}", report.overall_confidence())).cyan()
    );

    println!("\n{}", style("VERIFIED CLAIMS ANALYSIS").bold().underlined());
    for (i, record) in report.verified_claims.iter().enumerate() {
        render_verdict(i + 1, record);
    }

    println!("\n{}", style("ETHICS PROFESSOR REVIEW").bold().underlined());
    println!("{}", report.ethics_analysis);
    println!("\n{rule}");
}

fn render_verdict(index: usize, record: &VerdictRecord) {
    println!("\n{index}. CLAIM: {}", record.claim);

    let verdict = match record.verdict {
        Verdict::True => style(record.verdict.as_str()).green(),
        Verdict::False => style(record.verdict.as_str()).red(),
        Verdict::Misleading | Verdict::NeedsContext => style(record.verdict.as_str()).yellow(),
        Verdict::Unverifiable => style(record.verdict.as_str()).dim(),
    };
    println!("   VERDICT: {verdict}");
    println!("   CONFIDENCE: {:.2}", record.confidence);
    println!("   EVIDENCE QUALITY: {}", record.evidence_quality);
    println!("   SOURCE CONSENSUS: {}", record.source_consensus);

    if !record.reasoning.is_empty() {
        println!("   REASONING: {}", record.reasoning);
    }
    if record.has_fallacies() {
        println!("   FALLACIES: {}", record.fallacies.join(", "));
    }
}
