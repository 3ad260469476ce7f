//! Behavioural tests for the composite `Scheme` command.

use osgiliath_core::command::{Command, Scheme};
use osgiliath_test_support::{CommandJournal, RecordingCommand};

fn three_step_scheme(journal: &CommandJournal) -> Scheme {
    Scheme::new(vec![
        RecordingCommand::boxed("first", journal),
        RecordingCommand::boxed("second", journal),
        RecordingCommand::boxed("third", journal),
    ])
}

#[test]
fn test_execute_runs_each_child_once_in_index_order() {
    // Arrange
    let journal = CommandJournal::new();
    let scheme = three_step_scheme(&journal);

    // Act
    scheme.execute();

    // Assert
    assert_eq!(
        journal.entries(),
        vec!["first.execute", "second.execute", "third.execute"]
    );
}

#[test]
fn test_undo_runs_each_child_once_in_the_same_order_as_execute() {
    // Arrange
    let journal = CommandJournal::new();
    let scheme = three_step_scheme(&journal);

    // Act
    scheme.undo();

    // Assert
    assert_eq!(
        journal.entries(),
        vec!["first.undo", "second.undo", "third.undo"]
    );
}

#[test]
fn test_execute_twice_repeats_every_side_effect() {
    // Arrange
    let journal = CommandJournal::new();
    let scheme = Scheme::new(vec![
        RecordingCommand::boxed("a", &journal),
        RecordingCommand::boxed("b", &journal),
    ]);

    // Act
    scheme.execute();
    scheme.execute();

    // Assert
    assert_eq!(
        journal.entries(),
        vec!["a.execute", "b.execute", "a.execute", "b.execute"]
    );
}

#[test]
fn test_nested_schemes_flatten_in_order() {
    // Arrange
    let journal = CommandJournal::new();
    let inner = Scheme::new(vec![
        RecordingCommand::boxed("inner-1", &journal),
        RecordingCommand::boxed("inner-2", &journal),
    ]);
    let outer = Scheme::new(vec![
        RecordingCommand::boxed("before", &journal),
        Box::new(inner),
        RecordingCommand::boxed("after", &journal),
    ]);

    // Act
    outer.execute();
    outer.undo();

    // Assert
    assert_eq!(
        journal.entries(),
        vec![
            "before.execute",
            "inner-1.execute",
            "inner-2.execute",
            "after.execute",
            "before.undo",
            "inner-1.undo",
            "inner-2.undo",
            "after.undo",
        ]
    );
}

#[test]
fn test_empty_scheme_is_a_no_op() {
    // Arrange
    let scheme = Scheme::default();

    // Act
    scheme.execute();
    scheme.undo();

    // Assert
    assert!(scheme.is_empty());
    assert_eq!(scheme.len(), 0);
}
