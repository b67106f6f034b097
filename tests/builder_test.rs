use design_playgrounds::core::builder::{Person, PersonBuilder, PersonFacets};

fn expected() -> Person {
    Person {
        street_address: "123 London Road".to_string(),
        post_code: "SW12BC".to_string(),
        city: "London".to_string(),
        company_name: "Fabrikam".to_string(),
        position: "Engineer".to_string(),
        annual_income: 123000,
    }
}

#[test]
fn test_address_then_job() {
    let person = PersonBuilder::new()
        .lives()
        .at("123 London Road")
        .in_city("London")
        .with_post_code("SW12BC")
        .works()
        .at("Fabrikam")
        .as_a("Engineer")
        .earning(123000)
        .build();

    assert_eq!(person, expected());
}

#[test]
fn test_job_then_address() {
    let person = PersonBuilder::new()
        .works()
        .earning(123000)
        .as_a("Engineer")
        .at("Fabrikam")
        .lives()
        .with_post_code("SW12BC")
        .at("123 London Road")
        .in_city("London")
        .build();

    assert_eq!(person, expected());
}
