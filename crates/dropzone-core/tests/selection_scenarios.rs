//! Integration test: drive a `FileSelection` through drag, drop, and
//! picker sequences the way the browser layer does.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dropzone_core::{
    CandidateFile, DragInput, DropzoneConfig, DropzoneOptions, FileSelection, PickerOutcome,
    RawFileList, SelectionCallbacks,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct TestFile {
    name: String,
    mime: String,
    size: u64,
}

impl CandidateFile for TestFile {
    fn name(&self) -> &str {
        &self.name
    }
    fn declared_type(&self) -> &str {
        &self.mime
    }
    fn size_bytes(&self) -> u64 {
        self.size
    }
}

fn file(name: &str, mime: &str, size: u64) -> TestFile {
    TestFile {
        name: name.into(),
        mime: mime.into(),
        size,
    }
}

/// A drag event that optionally carries files.
struct Drag(Vec<TestFile>);

impl DragInput for Drag {
    type File = TestFile;

    fn suppress_default(&self) {}
    fn show_copy_effect(&self) {}
    fn dropped_files(&self) -> Vec<TestFile> {
        self.0.clone()
    }
}

/// Everything the callbacks reported.
#[derive(Default)]
struct Recorder {
    file_changes: RefCell<Vec<Vec<String>>>,
    errors: RefCell<Vec<String>>,
}

fn png_config(max_files: usize, max_file_size: u64) -> DropzoneConfig {
    DropzoneConfig::from_options(DropzoneOptions {
        max_file_size: Some(max_file_size),
        max_files: Some(max_files),
        accepted_types: Some(vec!["image/png".into()]),
    })
    .expect("valid config")
}

fn recording_selection(config: DropzoneConfig) -> (FileSelection<TestFile>, Rc<Recorder>) {
    let recorder = Rc::new(Recorder::default());
    let on_change = Rc::clone(&recorder);
    let on_error = Rc::clone(&recorder);
    let callbacks = SelectionCallbacks::new()
        .on_files_change(move |files: &[TestFile]| {
            on_change
                .file_changes
                .borrow_mut()
                .push(files.iter().map(|f| f.name.clone()).collect());
        })
        .on_error(move |message| on_error.errors.borrow_mut().push(message.to_owned()));
    (FileSelection::new(config, callbacks), recorder)
}

#[test]
fn oversized_batch_leaves_prior_files_untouched() {
    let (mut selection, recorder) = recording_selection(png_config(2, 1000));
    selection.on_drop(&Drag(vec![file("keep.png", "image/png", 1)]));
    assert_eq!(recorder.file_changes.borrow().len(), 1);

    selection.on_drop(&Drag(vec![
        file("a.png", "image/png", 1),
        file("b.png", "image/png", 1),
        file("c.png", "image/png", 1),
    ]));

    assert_eq!(selection.files(), [file("keep.png", "image/png", 1)]);
    assert_eq!(recorder.errors.borrow().len(), 1);
    assert_eq!(
        selection.error(),
        Some("up to 2 files can be uploaded at once")
    );
    // No second files-change notification.
    assert_eq!(recorder.file_changes.borrow().len(), 1);
}

#[test]
fn partially_invalid_batch_is_not_applied() {
    let (mut selection, recorder) = recording_selection(png_config(2, 1000));
    selection.on_drop(&Drag(vec![file("old.png", "image/png", 1)]));
    assert_eq!(*recorder.file_changes.borrow(), [vec!["old.png".to_owned()]]);

    selection.on_drop(&Drag(vec![
        file("a.png", "image/png", 500),
        file("b.gif", "image/gif", 10),
    ]));

    assert_eq!(selection.files(), [file("old.png", "image/png", 1)]);
    assert_eq!(selection.error(), Some("b.gif: unsupported format"));
    assert_eq!(recorder.file_changes.borrow().len(), 1);
    assert_eq!(*recorder.errors.borrow(), ["b.gif: unsupported format"]);
    assert!(!selection.is_loading());
}

#[test]
fn multiple_rejections_are_joined_with_commas() {
    let (mut selection, _recorder) = recording_selection(png_config(3, 1000));

    selection.ingest(RawFileList::Picked(vec![
        file("a.gif", "image/gif", 1),
        file("b.png", "image/png", 2000),
        file("c.png", "image/png", 1),
    ]));

    assert_eq!(
        selection.error(),
        Some("a.gif: unsupported format, b.png: file exceeds the size limit (max 0MB)")
    );
}

#[test]
fn valid_batch_replaces_files_in_input_order() {
    let (mut selection, recorder) = recording_selection(png_config(3, 1000));

    selection.on_drop(&Drag(vec![
        file("2.png", "image/png", 20),
        file("1.png", "image/png", 10),
    ]));

    let names: Vec<_> = selection.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["2.png", "1.png"]);
    assert_eq!(
        *recorder.file_changes.borrow(),
        [vec!["2.png".to_owned(), "1.png".to_owned()]]
    );
    assert!(selection.error().is_none());
}

#[test]
fn clear_files_is_idempotent() {
    let (mut selection, recorder) = recording_selection(png_config(3, 1000));
    selection.on_drop(&Drag(vec![file("a.png", "image/png", 1)]));
    selection.ingest(RawFileList::Dropped(vec![file("x.gif", "image/gif", 1)]));
    assert!(selection.error().is_some());

    selection.clear_files();
    let once = selection.state().clone();
    selection.clear_files();

    assert_eq!(selection.state(), &once);
    assert!(selection.files().is_empty());
    assert!(selection.error().is_none());
    let changes = recorder.file_changes.borrow();
    assert_eq!(changes.last(), Some(&Vec::new()));
}

#[test]
fn nested_drag_enter_keeps_target_active() {
    let (mut selection, _recorder) = recording_selection(png_config(2, 1000));
    let event = Drag(Vec::new());

    selection.on_drag_enter(&event);
    selection.on_drag_enter(&event);
    selection.on_drag_leave(&event);

    assert!(selection.is_drag_active());
    assert_eq!(selection.drag_depth(), 1);
}

#[test]
fn surplus_drag_leave_does_not_underflow() {
    let (mut selection, _recorder) = recording_selection(png_config(2, 1000));
    let event = Drag(Vec::new());

    selection.on_drag_enter(&event);
    selection.on_drag_leave(&event);
    selection.on_drag_leave(&event);

    assert!(!selection.is_drag_active());
    assert_eq!(selection.drag_depth(), 0);
}

#[test]
fn drop_resets_miscounted_drag_depth() {
    let (mut selection, _recorder) = recording_selection(png_config(2, 1000));
    let event = Drag(Vec::new());
    for _ in 0..3 {
        selection.on_drag_enter(&event);
    }
    assert_eq!(selection.drag_depth(), 3);

    selection.on_drop(&event);

    assert!(!selection.is_drag_active());
    assert_eq!(selection.drag_depth(), 0);
}

#[test]
fn out_of_range_remove_is_silent() {
    let (mut selection, recorder) = recording_selection(png_config(2, 1000));
    selection.on_drop(&Drag(vec![file("a.png", "image/png", 1)]));
    let notifications = recorder.file_changes.borrow().len();

    assert_eq!(selection.remove_file(5), None);

    assert_eq!(selection.files().len(), 1);
    assert_eq!(recorder.file_changes.borrow().len(), notifications);
}

#[test]
fn remove_file_notifies_with_remaining_files() {
    let (mut selection, recorder) = recording_selection(png_config(3, 1000));
    selection.on_drop(&Drag(vec![
        file("a.png", "image/png", 1),
        file("b.png", "image/png", 1),
        file("c.png", "image/png", 1),
    ]));

    let removed = selection.remove_file(1);

    assert_eq!(removed, Some(file("b.png", "image/png", 1)));
    assert_eq!(
        recorder.file_changes.borrow().last(),
        Some(&vec!["a.png".to_owned(), "c.png".to_owned()])
    );
}

#[test]
fn picker_and_drop_share_one_pipeline() {
    let (mut selection, recorder) = recording_selection(png_config(2, 1000));

    selection.on_picker_completed(PickerOutcome::Selected(vec![file("p.png", "image/png", 1)]));
    selection.on_drop(&Drag(vec![file("d.png", "image/png", 1)]));

    assert_eq!(selection.files(), [file("d.png", "image/png", 1)]);
    assert_eq!(recorder.file_changes.borrow().len(), 2);
}

#[test]
fn controller_stays_usable_after_errors() {
    let (mut selection, _recorder) = recording_selection(png_config(1, 1000));
    let loading_seen = Rc::new(Cell::new(false));
    let flag = Rc::clone(&loading_seen);
    selection.subscribe(move |state| {
        if state.is_loading {
            flag.set(true);
        }
    });

    selection.on_drop(&Drag(vec![file("bad.txt", "text/plain", 1)]));
    selection.clear_error();
    selection.on_drop(&Drag(vec![file("good.png", "image/png", 1)]));

    assert!(loading_seen.get());
    assert!(selection.error().is_none());
    assert_eq!(selection.files().len(), 1);
}
