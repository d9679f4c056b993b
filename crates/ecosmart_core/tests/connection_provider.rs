use ecosmart_core::{
    check_health, ConnectionProvider, DbConfig, DbError, DbHealth, EntityRepository,
    RepositoryFactory, Residence,
};
use std::sync::Arc;
use std::thread;

#[test]
fn get_returns_same_handle_while_open() {
    let provider = ConnectionProvider::new(DbConfig::in_memory());

    let first = provider.get().unwrap();
    let second = provider.get().unwrap();
    let third = provider.get().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&second, &third));
    assert!(!first.is_closed());
}

#[test]
fn get_reopens_after_handle_is_closed() {
    let provider = ConnectionProvider::new(DbConfig::in_memory());
    let first = provider.get().unwrap();
    first.close().unwrap();
    assert!(first.is_closed());

    let reopened = provider.get().unwrap();
    assert!(!Arc::ptr_eq(&first, &reopened));
    assert!(!reopened.is_closed());
    assert!(Arc::ptr_eq(&reopened, &provider.get().unwrap()));
}

#[test]
fn reopened_file_store_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let factory = RepositoryFactory::new(ConnectionProvider::new(DbConfig::file(
        dir.path().join("ecosmart.db"),
    )));

    let repo = factory.residence_repository().unwrap();
    let id = repo.create(&Residence::new("Rua A", 1)).unwrap();
    repo.connection().close().unwrap();

    let repo = factory.residence_repository().unwrap();
    let loaded = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.address, "Rua A");
}

#[test]
fn open_failure_propagates_and_is_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").join("nested").join("ecosmart.db");
    let provider = ConnectionProvider::new(DbConfig::file(&missing));

    let err = provider.get().unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));

    std::fs::create_dir_all(missing.parent().unwrap()).unwrap();
    assert!(provider.get().is_ok());
}

#[test]
fn factory_repositories_share_one_connection() {
    let factory = RepositoryFactory::new(ConnectionProvider::new(DbConfig::in_memory()));

    let clients = factory.client_repository().unwrap();
    let residences = factory.residence_repository().unwrap();
    let devices = factory.device_repository().unwrap();
    let consumptions = factory.consumption_repository().unwrap();
    let notifications = factory.notification_repository().unwrap();

    assert!(Arc::ptr_eq(clients.connection(), residences.connection()));
    assert!(Arc::ptr_eq(clients.connection(), devices.connection()));
    assert!(Arc::ptr_eq(clients.connection(), consumptions.connection()));
    assert!(Arc::ptr_eq(clients.connection(), notifications.connection()));
}

#[test]
fn repositories_see_each_others_writes_on_memory_store() {
    let factory = RepositoryFactory::new(ConnectionProvider::new(DbConfig::in_memory()));

    let id = factory
        .residence_repository()
        .unwrap()
        .create(&Residence::new("Rua B", 2))
        .unwrap();

    let other = factory.residence_repository().unwrap();
    assert!(other.get_by_id(id).unwrap().is_some());
}

#[test]
fn health_reports_connected_and_open_errors() {
    let provider = ConnectionProvider::new(DbConfig::in_memory());
    assert_eq!(check_health(&provider), DbHealth::Connected);

    let dir = tempfile::tempdir().unwrap();
    let broken = ConnectionProvider::new(DbConfig::file(
        dir.path().join("absent").join("ecosmart.db"),
    ));
    let health = check_health(&broken);
    assert!(matches!(health, DbHealth::Error { .. }));
    assert!(!health.is_up());
}

#[test]
fn concurrent_creates_through_cloned_repositories_all_land() {
    let factory = RepositoryFactory::new(ConnectionProvider::new(DbConfig::in_memory()));
    let repo = factory.residence_repository().unwrap();

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let repo = repo.clone();
            thread::spawn(move || {
                for n in 0..50 {
                    repo.create(&Residence::new(format!("Rua {worker}-{n}"), worker))
                        .unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let all = factory.residence_repository().unwrap().get_all().unwrap();
    assert_eq!(all.len(), 400);
}

#[test]
fn poisoned_handle_is_reported_and_released_on_close() {
    let factory = RepositoryFactory::new(ConnectionProvider::new(DbConfig::in_memory()));
    let repo = factory.residence_repository().unwrap();
    let id = repo.create(&Residence::new("Rua C", 3)).unwrap();

    let shared = Arc::clone(repo.connection());
    let joined = thread::spawn(move || {
        shared.with(|_conn| -> rusqlite::Result<()> { panic!("statement worker failed") })
    })
    .join();
    assert!(joined.is_err());

    let held = repo.connection();
    assert!(held.is_poisoned());
    assert!(!held.is_closed());
    assert!(matches!(
        factory.residence_repository(),
        Err(DbError::LockPoisoned)
    ));
    let err = repo.get_by_id(id).unwrap_err();
    assert!(matches!(err.db_error(), Some(DbError::LockPoisoned)));

    held.close().unwrap();
    assert!(held.is_closed());

    let reopened = factory.residence_repository().unwrap();
    assert!(!Arc::ptr_eq(reopened.connection(), held));
    assert!(reopened.get_all().unwrap().is_empty());
}
