//! Index statistics command

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};

pub fn run(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let stats = ctx.engine.stats();

    match cli.format {
        OutputFormat::Json => println!("{}", to_json(&stats)?),
        OutputFormat::Table => {
            println!("proteins:              {}", stats.proteins);
            println!("GO terms:              {}", stats.go_terms);
            println!("external ids:          {}", stats.external_ids);
            println!("secondary ids:         {}", stats.secondary_ids);
            println!("ambiguous ids:         {}", stats.ambiguous_ids);
            println!("annotations:           {}", stats.annotations);
            println!("interactions:          {}", stats.interactions);
            println!("duplicate proteins:    {}", stats.build.duplicate_proteins);
            println!("unmatched alias rows:  {}", stats.build.id_records_unmatched);
            println!("dropped annotations:   {}", stats.build.edges.dropped_annotations);
            println!("ignored edges:         {}", stats.build.edges.ignored);
        }
    }
    Ok(())
}
