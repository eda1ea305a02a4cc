use chrono::NaiveDate;
use garage_core::{Car, EntityKind, Mechanic, RecordStore, RepairOrder, StoreError, Workshop};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn order(id: &str, workshop_id: &str, description: &str) -> RepairOrder {
    let mut order = RepairOrder::new(id, "CAR-1", workshop_id, "M-1", date(2024, 2, 10));
    order.description = description.to_string();
    order
}

#[test]
fn mechanic_crud_and_search() {
    let mut store = RecordStore::new();
    store.add_mechanic(Mechanic::new("M-1", "Ivan Petrov", "engine specialist", 35.0));
    store.add_mechanic(Mechanic::new("M-2", "Olga Engine", "electrician", 30.0));

    let mut updated = Mechanic::new("M-1", "Ivan Petrov", "master engine specialist", 42.5);
    updated.phone = "555-7788".to_string();
    store.update_mechanic(&updated).unwrap();
    assert_eq!(store.find_mechanic("M-1").unwrap(), &updated);

    let hits: Vec<_> = store
        .search_mechanics("ngine")
        .into_iter()
        .map(|m| m.employee_id.as_str())
        .collect();
    assert_eq!(hits, vec!["M-1", "M-2"]);

    // Phone is not part of mechanic search.
    assert!(store.search_mechanics("7788").is_empty());

    store.delete_mechanic("M-2").unwrap();
    assert!(store.find_mechanic("M-2").is_none());
}

#[test]
fn mechanic_update_miss_is_not_found() {
    let mut store = RecordStore::new();
    let err = store
        .update_mechanic(&Mechanic::new("M-9", "Ghost", "", 0.0))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: EntityKind::Mechanic,
            ..
        }
    ));
    assert!(store.mechanics().is_empty());
}

#[test]
fn car_crud_and_search() {
    let mut store = RecordStore::new();
    store.add_car(Car::new("CAR-1", "Toyota", 120, "red", "LIC-001"));
    store.add_car(Car::new("CAR-2", "Lada", 80, "white", "LIC-002"));

    store
        .update_car(&Car::new("CAR-1", "Toyota", 150, "blue", "LIC-002"))
        .unwrap();
    let car = store.find_car("CAR-1").unwrap();
    assert_eq!(car.power, 150);
    assert_eq!(car.color, "blue");

    assert_eq!(store.search_cars("LIC-002").len(), 2);
    assert_eq!(store.search_cars("Lada").len(), 1);

    assert_eq!(store.delete_car("CAR-2").unwrap(), 1);
    assert!(store.delete_car("CAR-2").unwrap_err().is_not_found());
}

#[test]
fn workshop_crud_and_search() {
    let mut store = RecordStore::new();
    store.add_workshop(Workshop::new("W1", "North Garage", "Lenina 1", "100"));
    store.add_workshop(Workshop::new("W2", "South Garage", "Mira 2", "200"));

    assert_eq!(store.search_workshops("Garage").len(), 2);
    assert_eq!(store.search_workshops("Mira").len(), 1);

    store
        .update_workshop(&Workshop::new("W2", "South Body Shop", "Mira 2", "201"))
        .unwrap();
    assert_eq!(store.find_workshop("W2").unwrap().name, "South Body Shop");

    store.delete_workshop("W1").unwrap();
    assert_eq!(store.workshops().len(), 1);
}

#[test]
fn order_crud_and_search_by_description() {
    let mut store = RecordStore::new();
    store.add_order(order("O1", "W1", "oil change"));
    store.add_order(order("O2", "W1", "brake pads"));

    let mut replacement = order("O2", "W2", "brake pads and discs");
    replacement.total_cost = 210.0;
    store.update_order(&replacement).unwrap();

    let stored = store.find_order("O2").unwrap();
    assert_eq!(stored.workshop_id, "W2");
    assert_eq!(stored.total_cost, 210.0);

    assert_eq!(store.search_orders("brake").len(), 1);
    assert!(store.search_orders("W2").is_empty());

    store.delete_order("O1").unwrap();
    assert!(store.find_order("O1").is_none());
}

#[test]
fn attach_workshop_orders_copies_matching_orders() {
    let mut store = RecordStore::new();
    store.add_workshop(Workshop::new("W1", "North Garage", "", ""));
    store.add_order(order("O1", "W1", "oil change"));
    store.add_order(order("O2", "W2", "tyres"));
    store.add_order(order("O3", "W1", "alignment"));

    assert_eq!(store.orders_for_workshop("W1").len(), 2);
    assert_eq!(store.attach_workshop_orders("W1").unwrap(), 2);

    let ids: Vec<_> = store
        .find_workshop("W1")
        .unwrap()
        .orders
        .iter()
        .map(|o| o.order_id.as_str())
        .collect();
    assert_eq!(ids, vec!["O1", "O3"]);

    let err = store.attach_workshop_orders("W9").unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: EntityKind::Workshop,
            ..
        }
    ));
}

#[test]
fn records_serialize_with_snake_case_fields() {
    let mut order = order("O1", "W1", "oil change");
    order.total_cost = 99.5;

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["order_id"], "O1");
    assert_eq!(json["repair_date"], "2024-02-10");
    assert_eq!(json["total_cost"], 99.5);

    let decoded: RepairOrder = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, order);
}
