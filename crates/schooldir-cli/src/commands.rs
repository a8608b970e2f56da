use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, warn};

use schooldir_cli::data::{find_school, load_drafts, load_schools, save_drafts};
use schooldir_model::DraftStatus;
use schooldir_normalize::SchoolProfile;
use schooldir_shortlist::{FileStore, Shortlist, ids_from_query};

use crate::cli::{CompareArgs, DraftsArgs, DraftStatusArg, ProfileArgs, ShortlistAction, ShortlistArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell, status_cell};

pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let schools = load_schools(&args.data_file)?;
    let record = find_school(&schools, &args.school)
        .ok_or_else(|| anyhow!("unknown school id: {}", args.school))?;
    let profile = SchoolProfile::from_record(
        record,
        args.currency.to_currency(),
        &args.unpublished,
    );

    println!("{} ({})", profile.name, profile.id);
    println!("City: {}", profile.city);
    println!("Curriculum: {}", profile.curriculum);
    println!("Rating: {}", profile.rating);
    println!("Fees: {}", profile.fee_display);
    if profile.fee_publishable {
        println!(
            "Fee bounds: US${}K – US${}K",
            profile.lowest_fee, profile.highest_fee
        );
    }
    if let Some(range) = &profile.fee_range_converted {
        println!("Tuition: {range}");
    }

    if !profile.facilities.matches.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Featured"), header_cell("From")]);
        apply_table_style(&mut table);
        for category in &profile.facilities.featured {
            let sources: Vec<&str> = profile
                .facilities
                .matches
                .iter()
                .filter(|m| m.category == *category)
                .map(|m| m.source.as_str())
                .collect();
            table.add_row(vec![Cell::new(category.label()), Cell::new(sources.join(", "))]);
        }
        println!("{table}");
    }
    if !profile.facilities.remaining.is_empty() {
        println!("Also: {}", profile.facilities.remaining.join(", "));
    }
    Ok(())
}

pub fn run_compare(args: &CompareArgs) -> Result<()> {
    let schools = load_schools(&args.data_file)?;
    let ids = compare_ids(args)?;
    if ids.is_empty() {
        return Err(anyhow!("nothing to compare: no school ids given"));
    }

    let mut profiles: Vec<SchoolProfile> = Vec::new();
    for id in &ids {
        match find_school(&schools, id) {
            Some(record) => profiles.push(SchoolProfile::from_record(
                record,
                args.currency.to_currency(),
                &args.unpublished,
            )),
            None => warn!(id = %id, "unknown school id, skipping"),
        }
    }
    if profiles.is_empty() {
        return Err(anyhow!("none of the requested ids exist in the data file"));
    }
    info!(count = profiles.len(), "comparing schools");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("School"),
        header_cell("City"),
        header_cell("Curriculum"),
        header_cell("Fees"),
        header_cell("Low (US$K)"),
        header_cell("High (US$K)"),
        header_cell("Facilities"),
        header_cell("Rating"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for profile in &profiles {
        let featured: Vec<&str> = profile
            .facilities
            .featured
            .iter()
            .map(|category| category.label())
            .collect();
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(&profile.city),
            Cell::new(&profile.curriculum),
            Cell::new(&profile.fee_display),
            fee_bound_cell(profile.lowest_fee, profile.fee_publishable),
            fee_bound_cell(profile.highest_fee, profile.fee_publishable),
            Cell::new(featured.join(", ")),
            Cell::new(&profile.rating),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Resolve the id list to compare: an explicit share-link snapshot wins,
/// then explicit ids, then the persisted shortlist.
fn compare_ids(args: &CompareArgs) -> Result<Vec<String>> {
    if let Some(query) = &args.from_link {
        // A shared view renders exactly the link's schools, independent of
        // the viewer's own shortlist.
        return ids_from_query(query)
            .ok_or_else(|| anyhow!("share link carries no school list: {query}"));
    }
    if !args.schools.is_empty() {
        return Ok(args.schools.clone());
    }
    let store_path = args
        .store
        .clone()
        .context("no ids given: pass --schools, --from-link, or --store")?;
    let shortlist = Shortlist::hydrate(FileStore::new(store_path));
    Ok(shortlist.ids().to_vec())
}

fn fee_bound_cell(bound: f64, publishable: bool) -> Cell {
    if publishable && bound > 0.0 {
        Cell::new(bound)
    } else {
        dim_cell("-")
    }
}

pub fn run_shortlist(args: &ShortlistArgs) -> Result<()> {
    let mut shortlist = Shortlist::hydrate(FileStore::new(args.store.clone()));
    match &args.action {
        ShortlistAction::Add { id } => {
            shortlist.add(id);
            print_ids(&shortlist);
        }
        ShortlistAction::Remove { id } => {
            shortlist.remove(id);
            print_ids(&shortlist);
        }
        ShortlistAction::Toggle { id } => {
            let present = shortlist.toggle(id);
            println!("{id}: {}", if present { "added" } else { "removed" });
            print_ids(&shortlist);
        }
        ShortlistAction::List => print_ids(&shortlist),
        ShortlistAction::Link => {
            println!(
                "{}={}",
                schooldir_shortlist::SHARE_PARAM,
                shortlist.share_param()
            );
        }
        ShortlistAction::Merge { query } => {
            shortlist.merge_share_query(query);
            print_ids(&shortlist);
        }
    }
    Ok(())
}

fn print_ids(shortlist: &Shortlist<FileStore>) {
    if shortlist.is_empty() {
        println!("Shortlist is empty");
        return;
    }
    for (index, id) in shortlist.ids().iter().enumerate() {
        println!("{}. {id}", index + 1);
    }
}

pub fn run_drafts(args: &DraftsArgs) -> Result<()> {
    let mut drafts = load_drafts(&args.drafts_file)?;

    if let Some(slug) = &args.advance {
        let draft = drafts
            .iter_mut()
            .find(|draft| &draft.slug == slug)
            .ok_or_else(|| anyhow!("unknown draft slug: {slug}"))?;
        match draft.status.advance() {
            Some(next) => {
                info!(slug = %slug, from = %draft.status, to = %next, "advancing draft");
                draft.status = next;
                save_drafts(&args.drafts_file, &drafts)?;
            }
            None => warn!(slug = %slug, "draft is already published"),
        }
    }

    let wanted = args.status.map(to_status);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Title"),
        header_cell("Slug"),
        header_cell("Category"),
        header_cell("Status"),
        header_cell("Author"),
        header_cell("Created"),
    ]);
    apply_table_style(&mut table);
    for draft in drafts
        .iter()
        .filter(|draft| wanted.is_none_or(|status| draft.status == status))
    {
        table.add_row(vec![
            Cell::new(&draft.title),
            Cell::new(&draft.slug),
            Cell::new(&draft.category),
            status_cell(draft.status),
            match &draft.author {
                Some(author) => Cell::new(author),
                None => dim_cell("-"),
            },
            Cell::new(draft.created_at.format("%Y-%m-%d").to_string()),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn to_status(arg: DraftStatusArg) -> DraftStatus {
    match arg {
        DraftStatusArg::Pending => DraftStatus::Pending,
        DraftStatusArg::Approved => DraftStatus::Approved,
        DraftStatusArg::Published => DraftStatus::Published,
    }
}
