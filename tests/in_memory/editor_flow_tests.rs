//! End-to-end form sessions against the in-memory store.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskpad::form::{
    ports::{ImagePicker, ImagePickerConfig, PickedImage},
    services::{CommitOutcome, TaskEditor},
};
use taskpad::task::{adapters::memory::InMemoryTaskStore, domain::ImageRef};
use taskpad::view::{Avatar, ScreenView};

type TestEditor = TaskEditor<InMemoryTaskStore, DefaultClock>;

/// Picker standing in for the platform gallery.
struct GalleryPicker {
    selection: Option<PickedImage>,
}

impl ImagePicker for GalleryPicker {
    fn pick(&self, _config: &ImagePickerConfig) -> Option<PickedImage> {
        self.selection.clone()
    }
}

#[fixture]
fn editor() -> TestEditor {
    TaskEditor::new(InMemoryTaskStore::new(), DefaultClock)
}

#[rstest]
fn create_edit_and_delete_round_trip(mut editor: TestEditor) -> eyre::Result<()> {
    let gallery = GalleryPicker {
        selection: Some(PickedImage {
            path: "file:///cache/avatar.jpg".to_owned(),
            mime: "image/jpeg".to_owned(),
        }),
    };

    editor.open_create();
    editor.set_title("Water plants")?;
    editor.pick_image(&gallery)?;
    let outcome = editor.commit()?;
    let CommitOutcome::Created { id } = outcome else {
        eyre::bail!("expected created outcome, got {outcome:?}");
    };

    let view = ScreenView::from_editor(&editor);
    let row = view
        .rows
        .first()
        .ok_or_else(|| eyre::eyre!("row missing"))?;
    eyre::ensure!(row.id == id);
    eyre::ensure!(
        row.avatar
            == Avatar::Image {
                uri: "file:///cache/avatar.jpg".to_owned()
            }
    );

    editor.open_edit(id)?;
    editor.clear_image()?;
    editor.set_description("twice a week")?;
    editor.commit()?;

    let task = editor
        .task_list()
        .find(id)
        .ok_or_else(|| eyre::eyre!("edited task missing"))?;
    eyre::ensure!(task.title() == "Water plants");
    eyre::ensure!(task.description() == "twice a week");
    eyre::ensure!(task.image().is_none());

    editor.delete(id);
    eyre::ensure!(ScreenView::from_editor(&editor).rows.is_empty());
    Ok(())
}

#[rstest]
fn form_view_tracks_open_session(mut editor: TestEditor) -> eyre::Result<()> {
    editor.open_create();
    editor.set_title("draft title")?;
    editor.set_image(ImageRef::new("file:///p.png", "image/png"))?;

    let form = ScreenView::from_editor(&editor)
        .form
        .ok_or_else(|| eyre::eyre!("form should be visible"))?;
    eyre::ensure!(form.heading == "Add Task");
    eyre::ensure!(form.title == "draft title");
    eyre::ensure!(
        form.preview
            == Avatar::Image {
                uri: "file:///p.png".to_owned()
            }
    );

    editor.cancel();
    let view = ScreenView::from_editor(&editor);
    eyre::ensure!(view.form.is_none());
    eyre::ensure!(view.rows.is_empty());
    Ok(())
}

#[rstest]
fn cancelled_picker_leaves_placeholder(mut editor: TestEditor) -> eyre::Result<()> {
    let gallery = GalleryPicker { selection: None };
    editor.open_create();

    eyre::ensure!(editor.pick_image(&gallery)?.is_none());

    let form = ScreenView::from_editor(&editor)
        .form
        .ok_or_else(|| eyre::eyre!("form should be visible"))?;
    eyre::ensure!(form.preview == Avatar::Placeholder);
    Ok(())
}
