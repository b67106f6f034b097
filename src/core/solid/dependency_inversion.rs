//! Dependency inversion: `Research` (high level) only knows the
//! `RelationshipBrowser` abstraction, not how `Relationships` stores data.


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub trait RelationshipBrowser {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;
}

#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同時記錄兩個方向
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn add_siblings(&mut self, first: &Person, second: &Person) {
        self.relations
            .push((first.clone(), Relationship::Sibling, second.clone()));
        self.relations
            .push((second.clone(), Relationship::Sibling, first.clone()));
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|(from, rel, _)| from.name == name && *rel == Relationship::Parent)
            .map(|(_, _, to)| to)
            .collect()
    }
}

#[derive(Debug)]
pub struct Research {
    findings: Vec<String>,
}

impl Research {
    pub fn new(browser: &dyn RelationshipBrowser, parent: &str) -> Self {
        let findings = browser
            .find_all_children_of(parent)
            .into_iter()
            .map(|child| format!("{} has a child called {}", parent, child.name))
            .collect();
        Self { findings }
    }

    pub fn findings(&self) -> &[String] {
        &self.findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBrowser(Vec<Person>);

    impl RelationshipBrowser for FixedBrowser {
        fn find_all_children_of(&self, _name: &str) -> Vec<&Person> {
            self.0.iter().collect()
        }
    }

    #[test]
    fn test_research_over_relationships() {
        let john = Person::new("John");
        let chris = Person::new("Chris");
        let matt = Person::new("Matt");

        let mut relationships = Relationships::new();
        relationships.add_parent_and_child(&john, &chris);
        relationships.add_parent_and_child(&john, &matt);
        relationships.add_siblings(&chris, &matt);

        let research = Research::new(&relationships, "John");
        assert_eq!(
            research.findings(),
            [
                "John has a child called Chris".to_string(),
                "John has a child called Matt".to_string()
            ]
        );
        assert_eq!(relationships.len(), 6);
    }

    #[test]
    fn test_children_are_not_parents() {
        let mut relationships = Relationships::new();
        relationships.add_parent_and_child(&Person::new("John"), &Person::new("Chris"));

        assert!(Research::new(&relationships, "Chris").findings().is_empty());
    }

    #[test]
    fn test_research_accepts_any_browser() {
        let browser = FixedBrowser(vec![Person::new("Zoe")]);
        let research = Research::new(&browser, "Ann");
        assert_eq!(research.findings(), ["Ann has a child called Zoe".to_string()]);
    }
}
