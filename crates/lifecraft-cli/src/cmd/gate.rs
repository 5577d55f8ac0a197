use crate::output::print_json;
use lifecraft_core::types::{ModuleId, UserId};
use std::path::Path;

pub fn run(root: &Path, module: ModuleId, user: &UserId, json: bool) -> anyhow::Result<()> {
    let service = super::open_service(root)?;
    let check = service.can_start(user, module)?;

    if json {
        return print_json(&check);
    }

    if check.can_start {
        let note = if check.is_admin { " (admin)" } else { "" };
        println!("{module}: open{note}");
    } else {
        let missing: Vec<String> = check
            .missing_prerequisites
            .iter()
            .map(|m| m.to_string())
            .collect();
        println!("{module}: locked");
        println!("  missing: {}", missing.join(", "));
    }
    match check.next_module {
        Some(next) => println!("  next:    {next}"),
        None => println!("  next:    journey complete"),
    }
    println!("  overall: {}%", check.overall_progress);
    Ok(())
}
