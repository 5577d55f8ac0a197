use crate::output::print_json;
use lifecraft_core::types::UserId;
use std::path::Path;

pub fn run(root: &Path, user: &UserId, json: bool) -> anyhow::Result<()> {
    let service = super::open_service(root)?;
    let summary = service.next_module(user)?;

    if json {
        return print_json(&summary);
    }

    match (summary.next_module, summary.current_part) {
        (Some(module), Some(part)) => {
            let def = service.registry().get(module)?;
            println!("Next:    {} ({})", def.name, module);
            println!("Part:    {}", part.display_name());
            println!("Route:   {}", def.route);
        }
        _ => println!("Journey complete."),
    }
    println!("Overall: {}%", summary.overall_progress);
    Ok(())
}
