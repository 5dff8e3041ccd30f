use std::fs;
use std::path::Path;

use clap::Parser;

use grunge_strip::cli::{Cli, Commands, InspectArgs, Strategy, StripArgs};
use grunge_strip::error::GrungeStripError;
use grunge_strip::output::{
    JsonFormatter, OutputFormat, ReportFormatter, StripReport, SurveyFormatter,
    SurveyJsonFormatter, SurveyReport, SurveyTextFormatter, TextFormatter,
};
use grunge_strip::stripper::{
    PatternStripper, SegmentStripper, StripOutcome, TARGET_FILL, TextureStripper,
};
use grunge_strip::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Strip(args) => run_strip(args, &cli),
        Commands::Inspect(args) => run_inspect(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_strip(args: &StripArgs, cli: &Cli) -> i32 {
    match run_strip_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_strip_impl(args: &StripArgs, cli: &Cli) -> grunge_strip::Result<()> {
    // 1. Read the document
    let document = read_document(&args.input)?;

    // 2. Run the selected strategy
    let outcome = strip_document(&document, args.strategy)?;

    // 3. Write the result, overwriting unconditionally
    fs::write(&args.output, &outcome.text).map_err(|source| GrungeStripError::OutputWrite {
        path: args.output.clone(),
        source,
    })?;

    // 4. Surface heuristic drops on stderr
    for segment in &outcome.dropped {
        eprintln!(
            "warning: dropped segment #{} ({} bytes) without replacement",
            segment.index, segment.bytes
        );
    }

    // 5. Report sizes, measuring the output from disk
    let written_bytes = fs::metadata(&args.output)?.len();
    let report = StripReport {
        strategy: strategy_name(args.strategy).to_string(),
        input: args.input.clone(),
        output: args.output.clone(),
        original_bytes: document.len(),
        written_bytes,
        replaced: outcome.replaced,
        dropped: outcome.dropped,
    };

    let rendered = format_report(args.format, &report, cli.verbose)?;
    if !cli.quiet {
        print!("{rendered}");
    }

    Ok(())
}

fn run_inspect(args: &InspectArgs, cli: &Cli) -> i32 {
    match run_inspect_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_inspect_impl(args: &InspectArgs, cli: &Cli) -> grunge_strip::Result<()> {
    let document = read_document(&args.input)?;

    let stripper = SegmentStripper::new(TARGET_FILL);
    let report = SurveyReport {
        input: args.input.clone(),
        total_bytes: document.len(),
        segments: stripper.survey(&document),
    };

    let rendered = format_survey(args.format, &report)?;
    if !cli.quiet {
        print!("{rendered}");
    }

    Ok(())
}

fn read_document(path: &Path) -> grunge_strip::Result<String> {
    fs::read_to_string(path).map_err(|source| GrungeStripError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

fn strip_document(document: &str, strategy: Strategy) -> grunge_strip::Result<StripOutcome> {
    let stripper: Box<dyn TextureStripper> = match strategy {
        Strategy::Regex => Box::new(PatternStripper::new(TARGET_FILL)?),
        Strategy::Segment => Box::new(SegmentStripper::new(TARGET_FILL)),
    };
    Ok(stripper.strip(document))
}

const fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Regex => "regex",
        Strategy::Segment => "segment",
    }
}

fn format_report(
    format: OutputFormat,
    report: &StripReport,
    verbose: u8,
) -> grunge_strip::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn format_survey(format: OutputFormat, report: &SurveyReport) -> grunge_strip::Result<String> {
    match format {
        OutputFormat::Text => SurveyTextFormatter.format(report),
        OutputFormat::Json => SurveyJsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
