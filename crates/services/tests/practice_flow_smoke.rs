use lego_core::model::{ExerciseProfile, ProgressDraft};
use lego_core::time::fixed_clock;
use services::{AppServices, DEFAULT_EXERCISE_COUNT};

#[tokio::test]
async fn practice_session_is_recorded_for_registered_user() {
    let app = AppServices::in_memory(fixed_clock());

    let user = app.users().register("Martina".into(), 8).await.unwrap();
    let profile = ExerciseProfile::parse("7-9", "suma", "facil").unwrap();
    let exercises = app
        .exercises()
        .generate_batch(profile, DEFAULT_EXERCISE_COUNT)
        .unwrap();
    assert_eq!(exercises.len(), 10);

    // answer every third exercise correctly
    let correct = u32::try_from(exercises.iter().step_by(3).count()).unwrap();
    let recorded = app
        .progress()
        .record(ProgressDraft {
            user_id: user.id().into(),
            age_group: profile.age_group,
            operation: profile.operation,
            level: profile.level,
            score: correct * 10,
            stars: correct / 3,
            completed_exercises: DEFAULT_EXERCISE_COUNT,
        })
        .await
        .unwrap();
    assert_eq!(recorded.accuracy_percent(), 40);

    let again = app.users().register("Martina".into(), 8).await.unwrap();
    let history = app.progress().list_for_user(&again.id().into()).await.unwrap();
    assert_eq!(history, vec![recorded]);
}
