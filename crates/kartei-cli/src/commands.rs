//! Invocation orchestration: wire the store, engine, report and snapshot
//! layers together for one run of the scheduler.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info_span;

use kartei_engine::{Applied, TableMode, apply_batch, build_rows, select_decks};
use kartei_model::DeckName;
use kartei_report::{list_new_cards, resolve_target_date, studied_on, upcoming_by_date};
use kartei_store::{GitSnapshotStore, SnapshotStore, add_card, add_deck, load_global_config};

use crate::cli::{Cli, parse_response_pairs};
use crate::render::{print_new_cards, print_review_table, print_studied, print_upcoming};

/// Commit message of every scheduler snapshot.
const SNAPSHOT_MESSAGE: &str = "Auto-commit: scheduler changes";

pub fn run(cli: &Cli) -> Result<()> {
    let root = cli.input_folder.as_path();
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }
    let span = info_span!("invocation", root = %root.display());
    let _guard = span.enter();

    let snapshots =
        GitSnapshotStore::open_or_init(root).context("initialize snapshot repository")?;
    let global = load_global_config(root)?;
    let today = Local::now().date_naive();

    if cli.undo {
        snapshots.revert_last().context("undo last snapshot")?;
    }

    // Read-only views print and leave without snapshotting.
    if let Some(decks) = &cli.see_new {
        for name in decks {
            let deck = DeckName::new(name.as_str())?;
            let cards = list_new_cards(root, &deck)?;
            print_new_cards(&deck, &cards);
        }
        return Ok(());
    }
    if let Some(spec) = &cli.see_studied {
        let target = resolve_target_date(spec, today)?;
        let rows = studied_on(root, target)?;
        print_studied(&rows, target);
        return Ok(());
    }
    if cli.upcoming {
        let calendar = upcoming_by_date(root, today, cli.max_days_from_now)?;
        print_upcoming(&calendar, today, cli.by_deck, cli.max_days);
        return Ok(());
    }

    let responses = parse_response_pairs(&cli.responses).map_err(|usage| anyhow!("{usage}"))?;
    if cli.add.is_some() && !responses.is_empty() {
        bail!("--add cannot be combined with review responses");
    }
    if cli.due.is_some() && cli.add.is_none() {
        bail!("'--due' has no effect if not adding a card");
    }

    let mut changes = false;
    if let Some(name) = &cli.add_deck {
        let deck = DeckName::new(name.as_str())?;
        changes |= add_deck(root, &deck)?;
    }
    if let Some(add) = &cli.add {
        let deck = DeckName::new(add[0].as_str())?;
        let due = cli.due.as_deref().map(parse_due_date).transpose()?;
        add_card(root, &deck, &add[1], due)?;
        changes = true;
    }

    let mode = if cli.all {
        TableMode::ShowAll
    } else {
        TableMode::TopCard
    };
    // One RNG per invocation: the final-display build continues the same
    // jitter stream the grading build started.
    let mut rng = StdRng::seed_from_u64(global.seed);

    if !responses.is_empty() {
        let mut selections = select_decks(root, &global, today, cli.peek)?;
        let rows = build_rows(&selections, mode, today, global.jitter, &mut rng)?;
        // A bad index or a buried new card aborts only its own response;
        // anything else aborts the batch, with the ledgers of already
        // applied responses persisted first.
        changes |= apply_batch(
            &rows,
            &responses,
            &mut selections,
            today,
            announce,
            |error| eprintln!("error: {error}"),
        )?;
    }

    let selections = select_decks(root, &global, today, cli.peek)?;
    let rows = build_rows(&selections, mode, today, global.jitter, &mut rng)?;
    print_review_table(&rows);

    if changes {
        snapshots
            .commit_all(SNAPSHOT_MESSAGE)
            .context("snapshot changes")?;
    }
    Ok(())
}

fn announce(applied: &Applied) {
    match applied {
        Applied::Rescheduled {
            deck, label, due, ..
        } => println!("Updated {deck}: {label}. New due date: {due}"),
        Applied::Suspended { deck, label, .. } => println!("Suspended {deck}: {label}"),
        Applied::Cycled { deck, label } => {
            println!("Cycled {deck}: {label} to back of today's cards");
        }
    }
}

fn parse_due_date(spec: &str) -> Result<NaiveDate> {
    spec.parse()
        .map_err(|_| anyhow!("invalid due date '{spec}' (expected YYYY-MM-DD)"))
}
