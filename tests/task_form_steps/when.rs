//! When steps for task form BDD scenarios.

use super::world::TaskFormWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the form is opened for a new task")]
fn open_form_for_new_task(world: &mut TaskFormWorld) {
    world.editor.open_create();
}

#[when(r#"the form is opened for the task titled "{title}""#)]
fn open_form_for_task(world: &mut TaskFormWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_for_title(&title)?;
    world.editor.open_edit(id).wrap_err("open edit form")?;
    world.edited_id = Some(id);
    Ok(())
}

#[when(r#"the title is set to "{title}""#)]
fn set_title(world: &mut TaskFormWorld, title: String) -> Result<(), eyre::Report> {
    world.editor.set_title(title).wrap_err("set draft title")?;
    Ok(())
}

#[when(r#"the description is set to "{description}""#)]
fn set_description(world: &mut TaskFormWorld, description: String) -> Result<(), eyre::Report> {
    world
        .editor
        .set_description(description)
        .wrap_err("set draft description")?;
    Ok(())
}

#[when("the form is committed")]
fn commit_form(world: &mut TaskFormWorld) -> Result<(), eyre::Report> {
    world.editor.commit().wrap_err("commit form")?;
    Ok(())
}

#[when("the form is cancelled")]
fn cancel_form(world: &mut TaskFormWorld) {
    world.editor.cancel();
}

#[when(r#"the task titled "{title}" is deleted"#)]
fn delete_task(world: &mut TaskFormWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_for_title(&title)?;
    eyre::ensure!(
        world.editor.delete(id).is_applied(),
        "delete of {title:?} did not change the list"
    );
    Ok(())
}
