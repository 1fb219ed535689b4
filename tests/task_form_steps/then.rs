//! Then steps for task form BDD scenarios.

use super::world::TaskFormWorld;
use rstest_bdd_macros::then;
use taskpad::task::domain::Task;

fn last_task(world: &TaskFormWorld) -> Result<Task, eyre::Report> {
    world
        .editor
        .tasks()
        .last()
        .cloned()
        .ok_or_else(|| eyre::eyre!("task list is empty"))
}

#[then("the task list contains {count:usize} task")]
fn task_list_contains(world: &TaskFormWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.editor.tasks().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} task(s), found {found}"));
    }
    Ok(())
}

#[then(r#"the last task has title "{title}" and description "{description}""#)]
fn last_task_has_fields(
    world: &TaskFormWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    if task.title() != title || task.description() != description {
        return Err(eyre::eyre!(
            "expected ({title:?}, {description:?}), found ({:?}, {:?})",
            task.title(),
            task.description()
        ));
    }
    Ok(())
}

#[then("the last task has no image")]
fn last_task_has_no_image(world: &TaskFormWorld) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    if let Some(image) = task.image() {
        return Err(eyre::eyre!("expected no image, found {image}"));
    }
    Ok(())
}

#[then(r#"the edited task now has title "{title}""#)]
fn edited_task_has_title(world: &TaskFormWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .edited_id
        .ok_or_else(|| eyre::eyre!("missing edited task in scenario world"))?;
    let task = world
        .editor
        .task_list()
        .find(id)
        .ok_or_else(|| eyre::eyre!("edited task {id} is gone"))?;
    if task.title() != title {
        return Err(eyre::eyre!(
            "expected title {title:?}, found {:?}",
            task.title()
        ));
    }
    Ok(())
}

#[then("the task list is unchanged")]
fn task_list_unchanged(world: &TaskFormWorld) -> Result<(), eyre::Report> {
    let snapshot = world
        .snapshot
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task list snapshot in scenario world"))?;
    if &world.editor.tasks() != snapshot {
        return Err(eyre::eyre!("task list changed"));
    }
    Ok(())
}

#[then("the form is closed")]
fn form_is_closed(world: &TaskFormWorld) -> Result<(), eyre::Report> {
    if world.editor.session().is_open() {
        return Err(eyre::eyre!("expected the form to be closed"));
    }
    Ok(())
}

#[then(r#"the task list contains only "{title}""#)]
fn task_list_contains_only(world: &TaskFormWorld, title: String) -> Result<(), eyre::Report> {
    let titles: Vec<String> = world
        .editor
        .tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    if titles != vec![title.clone()] {
        return Err(eyre::eyre!("expected only {title:?}, found {titles:?}"));
    }
    Ok(())
}
