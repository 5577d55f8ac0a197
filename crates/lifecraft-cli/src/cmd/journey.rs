use crate::output::{print_json, print_table, yes_no};
use lifecraft_core::types::UserId;
use std::path::Path;

pub fn run(root: &Path, user: &UserId, json: bool) -> anyhow::Result<()> {
    let service = super::open_service(root)?;
    let journey = service.journey(user)?;

    if json {
        return print_json(&journey);
    }

    let rows = journey
        .modules
        .iter()
        .map(|m| {
            let marker = if m.is_next { "→" } else { "" };
            vec![
                marker.to_string(),
                m.order.to_string(),
                m.module_id.to_string(),
                m.status.to_string(),
                format!("{}%", m.completion_percentage),
                yes_no(m.is_locked),
            ]
        })
        .collect();
    print_table(&["", "#", "MODULE", "STATUS", "PCT", "LOCKED"], rows);

    println!();
    for part in &journey.parts {
        println!("{:<20} {}/{}", part.name, part.completed, part.total);
    }
    println!("\nOverall: {}%", journey.overall_progress);
    if journey.is_admin {
        println!("Admin: prerequisite locks bypassed");
    }
    Ok(())
}
