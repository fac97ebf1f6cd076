use super::*;

pub(super) fn handle_sync(args: SyncArgs) -> anyhow::Result<()> {
    let params = FetchParams {
        region: args.region,
        target_directory: args.root,
        access_key: args.access_key,
        secret_key: args.secret_key,
    };
    let lister = StaticRepoLister::new(args.repos);
    let mut cloner = GitCli::new();
    if let Some(seconds) = args.clone_timeout {
        cloner = cloner.with_timeout(Duration::from_secs(seconds));
    }

    let mut task = FetchTask::new("codecommit", params);
    let last_len = Cell::new(0usize);
    let progress_fn = |update: ProgressUpdate| render_fetch_progress(&last_len, &update);
    let progress: Option<&ProgressReporter<'_>> = if args.status {
        Some(&progress_fn)
    } else {
        None
    };

    let summary = task.run(&lister, &cloner, progress)?;
    if args.status {
        println!();
    }
    print_summary(task.name(), summary, task.state().processed_items());
    Ok(())
}

fn print_summary(name: &str, summary: FetchSummary, processed: usize) {
    println!(
        "{name}: processed={processed} cloned={} skipped={} failed={}",
        summary.cloned, summary.skipped, summary.failed
    );
}

pub(super) fn render_fetch_progress(last_len: &Cell<usize>, update: &ProgressUpdate) {
    let processed = update.processed_items.min(update.total_items);
    let bar = render_progress_bar(processed, update.total_items, 20);
    let line = format!(
        "{} {}/{} {} eta={}s",
        update.source_name,
        processed,
        update.total_items,
        bar,
        update.estimated_remaining.as_secs()
    );
    let prev_len = last_len.get();
    if line.len() < prev_len {
        print!("\r{line}{}", " ".repeat(prev_len - line.len()));
    } else {
        print!("\r{line}");
    }
    let _ = io::stdout().flush();
    last_len.set(line.len());
}

pub(super) fn render_progress_bar(step: usize, total: usize, width: usize) -> String {
    if total == 0 || width == 0 {
        return "[]".to_string();
    }
    let filled = ((step as f32 / total as f32) * width as f32).round() as usize;
    let filled = filled.min(width);
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}
