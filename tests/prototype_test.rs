use design_playgrounds::core::prototype::{Address, Copying, Employee};

#[test]
fn test_clone_then_mutate_nested_address() {
    let john = Employee::new("John", Address::new("123 London Road", "London"));

    let mut chris = john.clone();
    chris.name = "Chris".to_string();
    chris.address.street_address = "124 London Road".to_string();

    assert_eq!(john.address.street_address, "123 London Road");
    assert_ne!(chris.address, john.address);
    assert_eq!(
        chris.to_string(),
        "My name is Chris and I live at 124 London Road, London"
    );
}

#[test]
fn test_copy_constructor_then_mutate_nested_address() {
    let john = Employee::new("John", Address::new("123 London Road", "London"));

    let mut chris = Employee::copy_from(&john);
    chris.address.street_address = "124 London Road".to_string();

    assert_eq!(
        john.to_string(),
        "My name is John and I live at 123 London Road, London"
    );
}
