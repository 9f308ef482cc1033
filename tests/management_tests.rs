mod common;

use common::{memory_store, today_noon};
use rworklog::core::project::ProjectLogic;
use rworklog::core::setting::SettingLogic;
use rworklog::core::store::{ProjectTypeStore, SettingProvider, TagStore, WorkStore};
use rworklog::core::tag::TagLogic;
use rworklog::core::work::{FieldChange, WorkEdit, WorkLogic};
use rworklog::errors::ErrorCode;
use rworklog::models::input::{SettingInput, TimerInput};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn project_with_tags_round_trips_through_the_store() {
    let (store, _clock) = memory_store(today_noon());
    TagLogic::add(&store, "backend").unwrap();
    TagLogic::add(&store, "frontend").unwrap();

    let p = ProjectLogic::add(&store, "Website", &names(&["frontend", "backend"])).unwrap();
    assert_eq!(p.tag_names(), vec!["backend", "frontend"]);

    let listed = store.find_all_project_types().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Website");
}

#[test]
fn names_must_be_unique() {
    let (store, _clock) = memory_store(today_noon());
    TagLogic::add(&store, "ops").unwrap();
    assert_eq!(TagLogic::add(&store, "ops").unwrap_err().code(), ErrorCode::Validation);

    ProjectLogic::add(&store, "Infra", &[]).unwrap();
    assert_eq!(
        ProjectLogic::add(&store, "Infra", &[]).unwrap_err().code(),
        ErrorCode::Validation
    );
}

#[test]
fn unknown_tag_in_project_is_not_found() {
    let (store, _clock) = memory_store(today_noon());
    let err = ProjectLogic::add(&store, "Infra", &names(&["missing"])).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(store.find_all_project_types().unwrap().is_empty());
}

#[test]
fn work_tag_must_belong_to_the_project() {
    let (store, _clock) = memory_store(today_noon());
    TagLogic::add(&store, "api").unwrap();
    TagLogic::add(&store, "design").unwrap();
    ProjectLogic::add(&store, "Core", &names(&["api"])).unwrap();

    let ok = WorkLogic::create(&store, "Endpoints", Some("Core"), Some("api")).unwrap();
    assert_eq!(ok.project_name.as_deref(), Some("Core"));
    assert_eq!(ok.tag_name.as_deref(), Some("api"));

    let err = WorkLogic::create(&store, "Mockups", Some("Core"), Some("design")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);

    let err = WorkLogic::create(&store, "Loose", None, Some("api")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
}

#[test]
fn blank_title_is_rejected() {
    let (store, _clock) = memory_store(today_noon());
    let err = WorkLogic::create(&store, "   ", None, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
}

#[test]
fn changing_project_without_tag_clears_the_tag() {
    let (store, _clock) = memory_store(today_noon());
    TagLogic::add(&store, "api").unwrap();
    ProjectLogic::add(&store, "Core", &names(&["api"])).unwrap();
    ProjectLogic::add(&store, "Other", &[]).unwrap();
    let e = WorkLogic::create(&store, "Task", Some("Core"), Some("api")).unwrap();

    let renamed = WorkLogic::update(
        &store,
        e.id,
        &WorkEdit {
            title: Some("Task v2".into()),
            ..WorkEdit::default()
        },
    )
    .unwrap();
    assert_eq!(renamed.title, "Task v2");
    assert_eq!(renamed.tag_name.as_deref(), Some("api"));

    let moved = WorkLogic::update(
        &store,
        e.id,
        &WorkEdit {
            project: FieldChange::Set("Other".into()),
            ..WorkEdit::default()
        },
    )
    .unwrap();
    assert_eq!(moved.project_name.as_deref(), Some("Other"));
    assert_eq!(moved.tag_id, None);

    let cleared = WorkLogic::update(
        &store,
        e.id,
        &WorkEdit {
            project: FieldChange::Clear,
            ..WorkEdit::default()
        },
    )
    .unwrap();
    assert_eq!(cleared.project_type_id, None);
}

#[test]
fn project_in_use_cannot_be_deleted() {
    let (store, _clock) = memory_store(today_noon());
    ProjectLogic::add(&store, "Core", &[]).unwrap();
    let e = WorkLogic::create(&store, "Task", Some("Core"), None).unwrap();

    let err = ProjectLogic::delete(&store, "Core").unwrap_err();
    assert_eq!(err.code(), ErrorCode::InUse);

    store.delete(e.id).unwrap();
    ProjectLogic::delete(&store, "Core").unwrap();
    assert!(store.find_all_project_types().unwrap().is_empty());
}

#[test]
fn deleting_a_tag_unlinks_it_everywhere() {
    let (store, _clock) = memory_store(today_noon());
    TagLogic::add(&store, "api").unwrap();
    ProjectLogic::add(&store, "Core", &names(&["api"])).unwrap();
    let e = WorkLogic::create(&store, "Task", Some("Core"), Some("api")).unwrap();

    TagLogic::delete(&store, "api").unwrap();

    let project = store.find_project_type_by_name("Core").unwrap();
    assert!(project.tags.is_empty());
    let entry = store.find_by_id(e.id).unwrap();
    assert_eq!(entry.tag_name, None);
    assert!(store.find_all_tags().unwrap().is_empty());
}

#[test]
fn tag_rename_and_project_edit() {
    let (store, _clock) = memory_store(today_noon());
    TagLogic::add(&store, "a").unwrap();
    TagLogic::add(&store, "b").unwrap();
    ProjectLogic::add(&store, "P", &names(&["a"])).unwrap();

    let renamed = TagLogic::rename(&store, "a", "alpha").unwrap();
    assert_eq!(renamed.name, "alpha");

    let edited = ProjectLogic::edit(&store, "P", Some("Q"), Some(names(&["b"]).as_slice())).unwrap();
    assert_eq!(edited.name, "Q");
    assert_eq!(edited.tag_names(), vec!["b"]);

    let kept = ProjectLogic::edit(&store, "Q", None, None).unwrap();
    assert_eq!(kept.tag_names(), vec!["b"]);
}

#[test]
fn confirm_toggles_and_timer_overwrites() {
    let (store, _clock) = memory_store(today_noon());
    let e = WorkLogic::create(&store, "Task", None, None).unwrap();

    assert!(WorkLogic::toggle_confirmed(&store, e.id).unwrap());
    assert!(!WorkLogic::toggle_confirmed(&store, e.id).unwrap());

    let timer = TimerInput::parse(Some("1"), Some("30"), None).unwrap();
    let updated = WorkLogic::set_timer(&store, e.id, timer).unwrap();
    assert_eq!(updated.total_seconds, 5400);
}

#[test]
fn timer_input_validates_ranges() {
    assert_eq!(TimerInput::parse(None, None, None).unwrap().total_seconds(), 0);
    assert_eq!(
        TimerInput::parse(Some("100"), Some("0"), Some("5")).unwrap().total_seconds(),
        360_005
    );
    assert!(TimerInput::parse(None, Some("60"), None).is_err());
    assert!(TimerInput::parse(None, None, Some("75")).is_err());
    assert!(TimerInput::parse(Some("-1"), None, None).is_err());
    assert!(TimerInput::parse(Some("abc"), None, None).is_err());

    let back = TimerInput::from_seconds(3725);
    assert_eq!((back.hours, back.minutes, back.seconds), (1, 2, 5));
}

#[test]
fn setting_input_merges_into_current_values() {
    let (store, _clock) = memory_store(today_noon());

    let input = SettingInput {
        person_day: Some("6".into()),
        display_as_person_day: Some(false),
        ..SettingInput::default()
    };
    let s = SettingLogic::apply(&store, &input).unwrap();
    assert_eq!(s.person_day, 6);
    assert!(!s.display_as_person_day);
    assert_eq!(s.relative_date, 0);
    assert_eq!(store.get_setting().unwrap(), s);

    let bad = SettingInput {
        relative_date: Some("seven".into()),
        ..SettingInput::default()
    };
    assert_eq!(SettingLogic::apply(&store, &bad).unwrap_err().code(), ErrorCode::Validation);
    assert_eq!(store.get_setting().unwrap().person_day, 6);
}
