use agile_core::entities::Sprint;
use agile_core::requests::SprintForm;

use crate::cli::subcommands::SprintFormArgs;

/// Prefill from `current`, then overlay the flags that were given.
pub fn merge(current: &Sprint, args: &SprintFormArgs) -> SprintForm {
    let mut form = SprintForm::from_sprint(current);
    if let Some(title) = &args.title {
        form.title.clone_from(title);
    }
    if let Some(goal) = &args.goal {
        form.goal.clone_from(goal);
    }
    if args.start.is_some() {
        form.start_date = args.start;
    }
    if args.end.is_some() {
        form.end_date = args.end;
    }
    form
}
