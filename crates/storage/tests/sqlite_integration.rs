use lego_core::model::{
    Age, AgeGroup, Level, Operation, ProgressDraft, ProgressId, User, UserId, UserRef,
};
use lego_core::time::fixed_now;
use storage::repository::{ProgressRepository, StorageError, UserRepository};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let repo = SqliteRepository::connect(&format!("sqlite:file:{name}?mode=memory&cache=shared"))
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

fn build_user(name: &str, age: i64) -> User {
    User::new(UserId::generate(), name, Age::new(age).unwrap(), fixed_now()).unwrap()
}

#[tokio::test]
async fn sqlite_roundtrips_users() {
    let repo = connect("memdb_users").await;
    let user = build_user("Valentina", 7);
    repo.create_user(&user).await.unwrap();

    let by_id = repo.get_user(user.id()).await.unwrap().expect("by id");
    assert_eq!(by_id, user);

    let by_key = repo
        .find_user("Valentina", Age::new(7).unwrap())
        .await
        .unwrap()
        .expect("by natural key");
    assert_eq!(by_key.id(), user.id());
    assert_eq!(by_key.created_at(), fixed_now());

    assert!(repo.get_user(UserId::generate()).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_rejects_duplicate_name_and_age() {
    let repo = connect("memdb_dupes").await;
    repo.create_user(&build_user("Tomás", 10)).await.unwrap();

    let err = repo.create_user(&build_user("Tomás", 10)).await.unwrap_err();
    assert!(matches!(err, StorageError::Conflict));

    // same name, other age is a different learner
    repo.create_user(&build_user("Tomás", 11)).await.unwrap();
}

#[tokio::test]
async fn sqlite_lists_progress_in_insertion_order() {
    let repo = connect("memdb_progress").await;
    let user_id = UserRef::from(UserId::generate());

    for (idx, score) in [40_u32, 90, 10].into_iter().enumerate() {
        let progress = ProgressDraft {
            user_id: user_id.clone(),
            age_group: AgeGroup::TenToTwelve,
            operation: Operation::Division,
            level: Level::Dificil,
            score,
            stars: u32::try_from(idx).unwrap(),
            completed_exercises: 10,
        }
        .into_progress(ProgressId::generate(), fixed_now());
        repo.append_progress(&progress).await.unwrap();
    }

    let listed = repo.find_progress_by_user(&user_id).await.unwrap();
    let scores: Vec<u32> = listed.iter().map(|p| p.score()).collect();
    assert_eq!(scores, vec![40, 90, 10]);
    assert_eq!(listed[0].operation(), Operation::Division);
    assert_eq!(listed[0].age_group(), AgeGroup::TenToTwelve);
    assert_eq!(listed[2].stars(), 2);
    assert_eq!(listed[1].timestamp(), fixed_now());

    assert!(
        repo.find_progress_by_user(&UserRef::from(UserId::generate()))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn sqlite_keeps_progress_for_unregistered_ids() {
    let repo = connect("memdb_guest_progress").await;
    let guest = UserRef::new("guest");
    let progress = ProgressDraft {
        user_id: guest.clone(),
        age_group: AgeGroup::ThreeToFive,
        operation: Operation::Suma,
        level: Level::Facil,
        score: 30,
        stars: 1,
        completed_exercises: 5,
    }
    .into_progress(ProgressId::generate(), fixed_now());
    repo.append_progress(&progress).await.unwrap();

    let listed = repo.find_progress_by_user(&guest).await.unwrap();
    assert_eq!(listed, vec![progress]);
    assert_eq!(listed[0].user_id().as_str(), "guest");
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");
    repo.close().await;
}
