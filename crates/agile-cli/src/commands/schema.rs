use agile_core::entities::{BacklogItem, BurndownEntry, Member, Project, Sprint, Story};
use agile_core::view::BoardView;
use schemars::schema_for;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::{SchemaArgs, SchemaEntity};
use crate::output::output;

/// Handle `agl schema`. Needs no config or backend.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.entity {
        SchemaEntity::BacklogItem => schema_for!(BacklogItem),
        SchemaEntity::Sprint => schema_for!(Sprint),
        SchemaEntity::Member => schema_for!(Member),
        SchemaEntity::Story => schema_for!(Story),
        SchemaEntity::Project => schema_for!(Project),
        SchemaEntity::Burndown => schema_for!(BurndownEntry),
        SchemaEntity::Board => schema_for!(BoardView),
    };
    let format = if flags.format == OutputFormat::Raw {
        OutputFormat::Raw
    } else {
        OutputFormat::Json
    };
    output(&schema, format)
}
