//! Project History Integration Tests
//!
//! Tests for the complete editing flow including:
//! - Command log replay and compaction
//! - Undo/redo over adds, removes and updates
//! - The time-sorted subtitle view
//! - Saving and reopening projects through a file store

use std::sync::Arc;

use subtitle_studio::project::{compact, replay};
use subtitle_studio::store::{FileStore, ProjectRepository, StoreConfig};
use subtitle_studio::types::{
    Command, FieldUpdate, Position, ProjectState, SavedProject, SubtitleState, SubtitleUpdate,
};
use subtitle_studio::{Project, ProjectError, ProjectService};

fn base() -> ProjectState {
    ProjectState::new("p1", "Demo", "https://example.com/video.mp4")
}

fn text_update(text: &str) -> SubtitleUpdate {
    SubtitleUpdate {
        text: Some(text.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_round_trip_add_then_update() {
    let mut project = Project::new(base());
    project
        .add_subtitle(SubtitleState::with_text("s1", 1.23, 2.0, "hi"))
        .unwrap();
    project.update_subtitle("s1", text_update("hello")).unwrap();

    let compacted = project.compacted_commands();
    assert_eq!(compacted, project.commands().to_vec());
    assert_eq!(compacted.len(), 2);

    let state = replay(project.base_state(), &compacted).unwrap();
    assert_eq!(state.subtitles.len(), 1);
    assert_eq!(state.subtitles[0].text, "hello");
    assert_eq!(state.subtitles[0].time, 1.2);
    assert_eq!(&state, project.current_snapshot());
}

#[test]
fn test_consecutive_updates_merge() {
    let mut project = Project::new(base());
    project
        .add_subtitle(SubtitleState::with_text("s1", 0.0, 1.0, ""))
        .unwrap();
    project.update_field("s1", FieldUpdate::Time(5.0)).unwrap();
    project.update_field("s1", FieldUpdate::Time(5.5)).unwrap();
    project
        .update_field("s1", FieldUpdate::Text("x".to_string()))
        .unwrap();

    let compacted = project.compacted_commands();
    assert_eq!(compacted.len(), 2);
    assert_eq!(
        compacted[1],
        Command::update_subtitle(
            "s1",
            SubtitleUpdate {
                time: Some(5.5),
                text: Some("x".to_string()),
                ..Default::default()
            }
        )
    );
    assert_eq!(
        &replay(project.base_state(), &compacted).unwrap(),
        project.current_snapshot()
    );
}

#[test]
fn test_undo_after_remove_restores_subtitle() {
    let mut project = Project::new(base());
    let original = SubtitleState {
        id: "s2".to_string(),
        time: 4.0,
        duration: 1.5,
        text: "bye".to_string(),
        color: "#ff0000".to_string(),
        position: Position::new("left", "bottom"),
    };
    project.add_subtitle(original.clone()).unwrap();
    project.remove_subtitle("s2").unwrap();
    assert!(!project.contains_subtitle("s2"));

    assert!(project.undo());

    assert_eq!(project.current_snapshot().subtitle("s2"), Some(&original));
    assert!(project.redo_available());
    assert!(project.undo_available());
}

#[test]
fn test_sorted_view_ignores_insertion_order() {
    let mut project = Project::new(base());
    for (id, time) in [("a", 3.0), ("b", 1.0), ("c", 2.0)] {
        project
            .add_subtitle(SubtitleState::with_text(id, time, 1.0, id))
            .unwrap();
    }

    let times: Vec<f64> = project
        .subtitles()
        .to_vec()
        .iter()
        .map(|h| h.time(&project).unwrap())
        .collect();
    assert_eq!(times, vec![1.0, 2.0, 3.0]);

    let handle = project.subtitle("a").unwrap();
    handle.set_time(&mut project, 0.5).unwrap();
    let ids: Vec<&str> = project.subtitles().iter().map(|h| h.id()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_undo_redo_walks_history() {
    let mut project = Project::new(base());
    project
        .add_subtitle(SubtitleState::with_text("s1", 1.0, 1.0, "one"))
        .unwrap();
    project.update_subtitle("s1", text_update("two")).unwrap();
    project.set_silent(true).unwrap();
    let final_state = project.current_snapshot().clone();

    while project.undo() {}
    assert_eq!(project.current_snapshot(), project.base_state());
    assert!(!project.undo_available());
    assert_eq!(project.redo_commands().len(), 3);

    while project.redo().unwrap() {}
    assert_eq!(project.current_snapshot(), &final_state);
    assert!(!project.redo_available());
}

#[test]
fn test_new_edit_clears_redo() {
    let mut project = Project::new(base());
    project.set_silent(true).unwrap();
    project.undo();
    assert!(project.redo_available());

    project.set_silent(false).unwrap();

    assert!(!project.redo_available());
    assert!(!project.redo().unwrap());
}

#[test]
fn test_rejected_edits_leave_project_unchanged() {
    let mut project = Project::new(base());
    project
        .add_subtitle(SubtitleState::with_text("s1", 1.0, 1.0, "one"))
        .unwrap();
    project.set_silent(true).unwrap();
    project.undo();
    let before = project.current_snapshot().clone();

    assert!(matches!(
        project.remove_subtitle("ghost"),
        Err(ProjectError::NotFound(_))
    ));
    assert!(matches!(
        project.update_subtitle("ghost", text_update("x")),
        Err(ProjectError::NotFound(_))
    ));
    assert!(matches!(
        project.add_subtitle(SubtitleState::new("s1")),
        Err(ProjectError::DuplicateId(_))
    ));

    assert_eq!(project.current_snapshot(), &before);
    assert_eq!(project.commands().len(), 1);
    assert!(project.redo_available());
}

#[test]
fn test_handle_survives_rebuilds() {
    let mut project = Project::new(base());
    let handle = project
        .add_subtitle(SubtitleState::with_text("s1", 1.0, 1.0, "one"))
        .unwrap();

    project.set_silent(true).unwrap();
    project.undo();
    handle.set_text(&mut project, "changed").unwrap();

    assert_eq!(handle.text(&project).unwrap(), "changed");

    project.undo();
    project.undo();
    assert!(!handle.is_valid(&project));
    assert!(matches!(handle.text(&project), Err(ProjectError::NotFound(_))));
}

#[test]
fn test_unknown_commands_are_skipped_on_load() {
    let json = r#"{
        "baseState": {"id": "p1", "title": "Demo", "video": "v.mp4", "silent": false, "subtitles": []},
        "commands": [
            {"action": "sub.add", "baseState": {"id": "s1", "time": 1.0, "duration": 2.0, "text": "hi"}},
            {"action": "video.crop", "left": 10},
            {"action": "pr.silent", "silent": true}
        ]
    }"#;

    let saved = SavedProject::from_json(json).unwrap();
    let project = Project::try_from(saved).unwrap();

    assert!(project.silent());
    assert!(project.contains_subtitle("s1"));
    assert_eq!(project.commands().len(), 3);
    assert_eq!(compact(project.commands()).len(), 3);
}

#[test]
fn test_file_store_persists_compacted_log() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());

    let id = {
        let store = Arc::new(FileStore::open(config.clone()).unwrap());
        let repository = Arc::new(ProjectRepository::new(store));
        let service = ProjectService::open(repository.clone()).unwrap();

        let id = service.create_project("Demo", "video.mp4").unwrap();
        service
            .with_project(&id, |p| {
                p.add_subtitle(SubtitleState::with_text("s1", 2.0, 1.0, "a"))?;
                p.add_subtitle(SubtitleState::with_text("s2", 1.0, 1.0, "b"))?;
                p.update_field("s1", FieldUpdate::Text("aa".to_string()))?;
                p.update_field("s1", FieldUpdate::Color("#00ff00".to_string()))
            })
            .unwrap()
            .unwrap();

        let saved = repository.load(&id).unwrap().unwrap();
        assert_eq!(saved.commands.len(), 3);
        id
    };

    let store = Arc::new(FileStore::open(config).unwrap());
    let service = ProjectService::open(Arc::new(ProjectRepository::new(store))).unwrap();

    let (ids, s1) = service
        .with_project(&id, |p| {
            let ids: Vec<String> = p.subtitles().iter().map(|h| h.id().to_string()).collect();
            let s1 = p.current_snapshot().subtitle("s1").cloned();
            (ids, s1)
        })
        .unwrap();

    assert_eq!(ids, vec!["s2", "s1"]);
    let s1 = s1.unwrap();
    assert_eq!(s1.text, "aa");
    assert_eq!(s1.color, "#00ff00");
}

#[test]
fn test_unknown_commands_survive_save() {
    let json = r#"{
        "baseState": {"id": "p1", "title": "Demo", "video": "v.mp4"},
        "commands": [
            {"action": "sub.add", "baseState": {"id": "s1", "time": 1.0, "duration": 2.0}},
            {"action": "sub.split", "id": "s1", "at": 2.0}
        ]
    }"#;

    let mut project = Project::try_from(SavedProject::from_json(json).unwrap()).unwrap();
    project.update_subtitle("s1", text_update("edited")).unwrap();

    let out = project.to_saved().to_json().unwrap();
    assert!(out.contains(r#""action":"sub.split""#));
    assert!(out.contains(r#""at":2.0"#));

    let reloaded = Project::try_from(SavedProject::from_json(&out).unwrap()).unwrap();
    assert_eq!(reloaded.commands(), project.commands());
    assert_eq!(reloaded.current_snapshot(), project.current_snapshot());
}

#[test]
fn test_unknown_commands_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());
    let saved = SavedProject::from_json(
        r#"{"baseState": {"id": "p1"}, "commands": [{"action": "video.crop", "left": 10}]}"#,
    )
    .unwrap();

    {
        let store = Arc::new(FileStore::open(config.clone()).unwrap());
        let repository = ProjectRepository::new(store);
        repository.save(&saved.base_state, &saved.commands).unwrap();
    }

    {
        let store = Arc::new(FileStore::open(config.clone()).unwrap());
        let service = ProjectService::open(Arc::new(ProjectRepository::new(store))).unwrap();
        service
            .with_project("p1", |p| p.set_silent(true))
            .unwrap()
            .unwrap();
    }

    let store = Arc::new(FileStore::open(config).unwrap());
    let reloaded = ProjectRepository::new(store).load("p1").unwrap().unwrap();
    assert_eq!(reloaded.commands.len(), 2);
    assert_eq!(reloaded.commands[0], saved.commands[0]);
    assert_eq!(reloaded.commands[0].kind(), "video.crop");
}

#[test]
fn test_non_finite_times_are_rejected() {
    let mut project = Project::new(base());
    project
        .add_subtitle(SubtitleState::with_text("s1", 1.0, 1.0, "one"))
        .unwrap();

    assert!(matches!(
        project.add_subtitle(SubtitleState::with_text("s2", 1e308, 1.0, "x")),
        Err(ProjectError::InvalidTime { .. })
    ));
    assert!(matches!(
        project.add_subtitle(SubtitleState::with_text("s3", 1.0, f64::INFINITY, "x")),
        Err(ProjectError::InvalidTime { .. })
    ));
    assert!(matches!(
        project.update_field("s1", FieldUpdate::Time(f64::NAN)),
        Err(ProjectError::InvalidTime { .. })
    ));

    let handle = project.subtitle("s1").unwrap();
    assert!(matches!(
        handle.set_duration(&mut project, f64::NEG_INFINITY),
        Err(ProjectError::InvalidTime { .. })
    ));

    assert_eq!(project.commands().len(), 1);
    assert_eq!(project.current_snapshot().subtitles.len(), 1);
    assert_eq!(handle.time(&project).unwrap(), 1.0);
}

#[test]
fn test_rejected_time_keeps_project_loadable() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());

    let id = {
        let store = Arc::new(FileStore::open(config.clone()).unwrap());
        let service = ProjectService::open(Arc::new(ProjectRepository::new(store))).unwrap();
        let id = service.create_project("Demo", "video.mp4").unwrap();

        service
            .with_project(&id, |p| {
                p.add_subtitle(SubtitleState::with_text("s1", 1.0, 1.0, "ok"))
            })
            .unwrap()
            .unwrap();
        let rejected = service
            .with_project(&id, |p| {
                p.add_subtitle(SubtitleState::with_text("s2", 1e308, 1.0, "x"))
            })
            .unwrap();
        assert!(rejected.is_err());
        id
    };

    let store = Arc::new(FileStore::open(config).unwrap());
    let service = ProjectService::open(Arc::new(ProjectRepository::new(store))).unwrap();

    assert!(service.contains(&id));
    let count = service
        .with_project(&id, |p| p.current_snapshot().subtitles.len())
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_handle_reflects_updates_made_elsewhere() {
    let mut project = Project::new(base());
    let handle = project
        .add_subtitle(SubtitleState::with_text("s1", 1.0, 1.0, "one"))
        .unwrap();

    project
        .update_subtitle(
            "s1",
            SubtitleUpdate {
                time: Some(7.25),
                text: Some("moved".to_string()),
                color: Some("#00ff00".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(handle.is_valid(&project));
    assert_eq!(handle.text(&project).unwrap(), "moved");
    assert_eq!(handle.time(&project).unwrap(), 7.3);
    assert_eq!(handle.color(&project).unwrap(), "#00ff00");

    project.remove_subtitle("s1").unwrap();
    assert!(!handle.is_valid(&project));

    project.undo();
    assert!(handle.is_valid(&project));
    assert_eq!(handle.text(&project).unwrap(), "moved");
}
