mod common;

use common::{RecordingGenerator, Sketch};
use egui::{pos2, vec2};
use sketch_canvas::shape::factory::{create_shape, create_shape_for_tool};
use sketch_canvas::{Command, Document, ShapeError, ShapeKind, Tool};

#[test]
fn test_create_line() {
    let shape = create_shape(
        3,
        pos2(1.0, 2.0),
        pos2(30.0, 40.0),
        ShapeKind::Line,
        &RecordingGenerator,
    );

    assert_eq!(shape.id(), 3);
    assert_eq!(shape.kind(), ShapeKind::Line);
    assert_eq!(shape.coords(), (1.0, 2.0, 30.0, 40.0));
    assert_eq!(
        shape.renderable(),
        &Sketch::Line {
            start: pos2(1.0, 2.0),
            end: pos2(30.0, 40.0)
        }
    );
}

#[test]
fn test_rectangle_passes_signed_size() {
    let shape = create_shape(
        0,
        pos2(50.0, 40.0),
        pos2(10.0, 10.0),
        ShapeKind::Rectangle,
        &RecordingGenerator,
    );

    assert_eq!(shape.size(), vec2(-40.0, -30.0));
    assert_eq!(
        shape.renderable(),
        &Sketch::Rectangle {
            origin: pos2(50.0, 40.0),
            size: vec2(-40.0, -30.0)
        }
    );
}

#[test]
fn test_create_for_non_drawing_tool_fails() {
    let result = create_shape_for_tool(
        0,
        pos2(0.0, 0.0),
        pos2(0.0, 0.0),
        Tool::Selection,
        &RecordingGenerator,
    );
    assert_eq!(result, Err(ShapeError::UnsupportedKind("selection".to_string())));

    let shape = create_shape_for_tool(
        0,
        pos2(0.0, 0.0),
        pos2(5.0, 5.0),
        Tool::Rectangle,
        &RecordingGenerator,
    )
    .unwrap();
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
}

#[test]
fn test_document_ids_are_dense() {
    let mut doc = Document::new();
    assert!(doc.is_empty());
    assert_eq!(doc.next_id(), 0);

    for id in 0..3 {
        let shape = create_shape(
            id,
            pos2(0.0, 0.0),
            pos2(1.0, 1.0),
            ShapeKind::Line,
            &RecordingGenerator,
        );
        doc.push(shape).unwrap();
    }

    assert_eq!(doc.len(), 3);
    assert_eq!(doc.next_id(), 3);
    for (index, shape) in doc.shapes().iter().enumerate() {
        assert_eq!(shape.id(), index);
    }
}

#[test]
fn test_document_rejects_out_of_order_push() {
    let mut doc = Document::new();
    let shape = create_shape(
        5,
        pos2(0.0, 0.0),
        pos2(1.0, 1.0),
        ShapeKind::Line,
        &RecordingGenerator,
    );

    assert_eq!(
        doc.push(shape),
        Err(ShapeError::IdMismatch {
            expected: 0,
            found: 5
        })
    );
    assert!(doc.is_empty());
    assert_eq!(doc.revision(), 0);
}

#[test]
fn test_replace_overwrites_in_place() {
    let mut doc = Document::new();
    for id in 0..3 {
        let shape = create_shape(
            id,
            pos2(0.0, 0.0),
            pos2(1.0, 1.0),
            ShapeKind::Line,
            &RecordingGenerator,
        );
        doc.push(shape).unwrap();
    }
    let revision = doc.revision();

    let moved = create_shape(
        1,
        pos2(10.0, 10.0),
        pos2(20.0, 30.0),
        ShapeKind::Rectangle,
        &RecordingGenerator,
    );
    Command::ReplaceShape(moved.clone()).execute(&mut doc).unwrap();

    assert_eq!(doc.len(), 3);
    assert_eq!(doc.get(1), Some(&moved));
    assert_eq!(doc.get(0).unwrap().coords(), (0.0, 0.0, 1.0, 1.0));
    assert_eq!(doc.get(2).unwrap().coords(), (0.0, 0.0, 1.0, 1.0));
    assert_eq!(doc.revision(), revision + 1);
}

#[test]
fn test_replace_unknown_shape_fails() {
    let mut doc: Document<Sketch> = Document::new();
    let shape = create_shape(
        0,
        pos2(0.0, 0.0),
        pos2(1.0, 1.0),
        ShapeKind::Line,
        &RecordingGenerator,
    );

    let result = Command::ReplaceShape(shape).execute(&mut doc);
    assert_eq!(result, Err(ShapeError::UnknownShape { id: 0 }));
    assert!(doc.is_empty());
}
