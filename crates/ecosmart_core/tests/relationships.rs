use ecosmart_core::{
    Client, Consumption, ConnectionProvider, DbConfig, Device, EntityRepository, Notification,
    RepositoryFactory, Residence,
};

const READ_AT: i64 = 1_717_000_000_000;

fn factory() -> RepositoryFactory {
    RepositoryFactory::new(ConnectionProvider::new(DbConfig::in_memory()))
}

#[test]
fn household_scenario_links_and_does_not_cascade() {
    let factory = factory();
    let clients = factory.client_repository().unwrap();
    let residences = factory.residence_repository().unwrap();
    let devices = factory.device_repository().unwrap();
    let consumptions = factory.consumption_repository().unwrap();

    let client_id = clients
        .create(&Client::new("Ana", "ana@example.com", "111", "Rua A"))
        .unwrap();
    let residence_id = residences
        .create(&Residence::new("Rua A", client_id))
        .unwrap();
    let device_id = devices
        .create(&Device::new("Fridge", "appliance", Some(1.5), residence_id))
        .unwrap();
    let reading = Consumption::new(Some(2.3), READ_AT, device_id, residence_id);
    let reading_id = consumptions.create(&reading).unwrap();

    let by_residence = consumptions
        .get_consumptions_by_residence_id(residence_id)
        .unwrap();
    assert_eq!(
        by_residence,
        vec![Consumption {
            id: Some(reading_id),
            ..reading
        }]
    );
    assert_eq!(devices.get_devices_by_residence_id(residence_id).unwrap().len(), 1);
    assert_eq!(residences.get_residences_by_client_id(client_id).unwrap().len(), 1);

    clients.delete(client_id).unwrap();

    assert!(clients.get_by_id(client_id).unwrap().is_none());
    assert!(residences.get_by_id(residence_id).unwrap().is_some());
    assert!(devices.get_by_id(device_id).unwrap().is_some());
    assert!(consumptions.get_by_id(reading_id).unwrap().is_some());
    assert_eq!(residences.get_residences_by_client_id(client_id).unwrap().len(), 1);
}

#[test]
fn residences_are_scoped_to_their_client() {
    let repo = factory().residence_repository().unwrap();
    let first = repo.create(&Residence::new("Rua A", 1)).unwrap();
    let second = repo.create(&Residence::new("Rua B", 2)).unwrap();
    let third = repo.create(&Residence::new("Rua C", 1)).unwrap();

    let mut ids: Vec<_> = repo
        .get_residences_by_client_id(1)
        .unwrap()
        .into_iter()
        .map(|residence| residence.id.unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![first, third]);

    let for_two = repo.get_residences_by_client_id(2).unwrap();
    assert_eq!(for_two.len(), 1);
    assert_eq!(for_two[0].id, Some(second));
}

#[test]
fn consumption_lookups_use_stored_keys_independently() {
    let repo = factory().consumption_repository().unwrap();
    // Same device recorded against two residences: keys are denormalized.
    repo.create(&Consumption::new(Some(1.0), READ_AT, 7, 10)).unwrap();
    repo.create(&Consumption::new(Some(2.0), READ_AT + 1, 7, 20)).unwrap();
    repo.create(&Consumption::new(Some(3.0), READ_AT + 2, 8, 10)).unwrap();

    assert_eq!(repo.get_consumptions_by_device_id(7).unwrap().len(), 2);
    assert_eq!(repo.get_consumptions_by_device_id(8).unwrap().len(), 1);
    assert_eq!(repo.get_consumptions_by_residence_id(10).unwrap().len(), 2);
    assert_eq!(repo.get_consumptions_by_residence_id(20).unwrap().len(), 1);
}

#[test]
fn lookups_without_matches_are_empty() {
    let factory = factory();
    assert!(factory
        .consumption_repository()
        .unwrap()
        .get_consumptions_by_device_id(404)
        .unwrap()
        .is_empty());
    assert!(factory
        .consumption_repository()
        .unwrap()
        .get_consumptions_by_residence_id(404)
        .unwrap()
        .is_empty());
    assert!(factory
        .device_repository()
        .unwrap()
        .get_devices_by_residence_id(404)
        .unwrap()
        .is_empty());
    assert!(factory
        .residence_repository()
        .unwrap()
        .get_residences_by_client_id(404)
        .unwrap()
        .is_empty());
    assert!(factory
        .notification_repository()
        .unwrap()
        .get_notifications_by_client_id(404)
        .unwrap()
        .is_empty());
}

#[test]
fn notifications_are_scoped_to_their_client() {
    let repo = factory().notification_repository().unwrap();
    repo.create(&Notification::new("for one", READ_AT, 1)).unwrap();
    repo.create(&Notification::new("for two", READ_AT, 2)).unwrap();

    let for_one = repo.get_notifications_by_client_id(1).unwrap();
    assert_eq!(for_one.len(), 1);
    assert_eq!(for_one[0].message, "for one");
}

#[test]
fn update_can_move_device_between_residences() {
    let repo = factory().device_repository().unwrap();
    let id = repo
        .create(&Device::new("Heater", "appliance", Some(2.0), 1))
        .unwrap();

    let mut device = repo.get_by_id(id).unwrap().unwrap();
    device.residence_id = 2;
    repo.update(&device).unwrap();

    assert!(repo.get_devices_by_residence_id(1).unwrap().is_empty());
    assert_eq!(repo.get_devices_by_residence_id(2).unwrap(), vec![device]);
}
