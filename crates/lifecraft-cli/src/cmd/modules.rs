use crate::output::{print_json, print_table};
use lifecraft_core::registry::Registry;

pub fn run(json: bool) -> anyhow::Result<()> {
    let registry = Registry::lifecraft();

    if json {
        return print_json(&registry.modules());
    }

    let rows = registry
        .modules()
        .iter()
        .enumerate()
        .map(|(i, def)| {
            vec![
                (i + 1).to_string(),
                def.id.to_string(),
                def.name.to_string(),
                def.part.to_string(),
                def.stages.len().to_string(),
            ]
        })
        .collect();
    print_table(&["#", "MODULE", "NAME", "PART", "STAGES"], rows);
    Ok(())
}
