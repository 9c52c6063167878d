//! # chatscrub CLI
//!
//! Command-line interface for the chatscrub library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatscrub::cli::{Args, ExportFormat};
use chatscrub::export::{self, ArchiveEntry};
use chatscrub::filter::{FilterConfig, apply_filters};
use chatscrub::ingest::SourceInput;
use chatscrub::session::{Export, FileRecord, Session};
use chatscrub::ScrubError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ScrubError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("🧽 chatscrub v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Inputs:  {}", args.inputs.len());
    println!("💾 Output:  {}", args.output_dir.display());
    println!("📄 Format:  {}", args.format);

    // Build filter configuration
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
        println!("👤 From:    {}", from);
    }

    println!();

    // Read every input up front; the batch commits all-or-nothing.
    println!("⏳ Reading {} input(s)...", args.inputs.len());
    let ingest_start = Instant::now();
    let mut inputs = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        inputs.push(SourceInput::new(input_name(path), fs::read(path)?));
    }

    let mut session = Session::new();
    session.set_options(args.display_options());
    let added = session.ingest(&inputs)?;
    println!(
        "   Loaded {} file(s), {} message(s) ({:.2}s)",
        added,
        total_messages(&session),
        ingest_start.elapsed().as_secs_f64()
    );

    if args.list {
        println!();
        println!("📋 Files:");
        for file in session.files() {
            println!(
                "   {} ({} messages)",
                file.display_name(),
                file.message_count()
            );
        }
        return Ok(());
    }

    if added == 0 {
        println!("⚠️  No recognized transcripts among the inputs.");
        return Ok(());
    }

    // Produce exports
    let exports = if args.bulk {
        session.select_all();
        bulk_export(&session, &args, &filter_config)?
            .into_iter()
            .collect()
    } else {
        per_file_exports(&session, &args, &filter_config)?
    };

    // Write them out
    println!();
    println!("💾 Writing {} export(s)...", exports.len());
    fs::create_dir_all(&args.output_dir)?;
    for export in &exports {
        let target = args.output_dir.join(sanitize_file_name(&export.file_name));
        fs::write(&target, &export.payload)?;
        println!("   {}", target.display());
    }

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", args.output_dir.display());

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Files:    {}", session.files().len());
    println!("   Messages: {}", total_messages(&session));
    println!("   Exports:  {}", exports.len());
    println!("   Time:     {:.2}s", total_time.as_secs_f64());

    Ok(())
}

/// One export per loaded file, in the selected format.
fn per_file_exports(
    session: &Session,
    args: &Args,
    filter: &FilterConfig,
) -> Result<Vec<Export>, ScrubError> {
    let options = session.options();
    let mut exports = Vec::with_capacity(session.files().len());

    for file in session.files() {
        let messages = apply_filters(file.messages().to_vec(), filter);
        let export = match args.format {
            ExportFormat::Txt => Export {
                file_name: export::text_export_name(&args.prefix, file.display_name()),
                payload: export::to_text(&messages, &options).into_bytes(),
            },
            ExportFormat::Json => Export {
                file_name: export::json_export_name(&args.prefix, file.display_name()),
                payload: export::to_json(&messages, &options)?.into_bytes(),
            },
        };
        exports.push(export);
    }

    Ok(exports)
}

/// One archive over the whole selection.
fn bulk_export(
    session: &Session,
    args: &Args,
    filter: &FilterConfig,
) -> Result<Option<Export>, ScrubError> {
    if !filter.is_active() {
        return session.export_selection_archive(&args.prefix);
    }

    // Filters are applied per member, so the archive is built here rather
    // than through the session's unfiltered export.
    let options = session.options();
    let selected = session.selected_files();
    if selected.is_empty() {
        return Ok(None);
    }

    let entries: Vec<ArchiveEntry> = selected
        .iter()
        .map(|file| {
            let messages = apply_filters(file.messages().to_vec(), filter);
            ArchiveEntry::new(
                export::text_export_name(&args.prefix, file.display_name()),
                export::to_text(&messages, &options),
            )
        })
        .collect();

    Ok(Some(Export {
        file_name: export::bulk_export_name(&args.prefix),
        payload: export::bulk_archive(&entries)?,
    }))
}

fn total_messages(session: &Session) -> usize {
    session.files().iter().map(FileRecord::message_count).sum()
}

/// Classification keys off the file name; fall back to the full path for
/// nameless oddities so the error message still points somewhere.
fn input_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Archive member display names can carry path separators; flatten them
/// so every export lands directly in the output directory.
fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}
