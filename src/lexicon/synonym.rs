use std::fmt;

use super::Literal;

/// Ordered literals of one synset. The first literal is the representative.
///
/// Duplicate `(name, sense)` pairs are not rejected here; callers that care
/// check [`Synonym::contains`] first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Synonym {
    literals: Vec<Literal>,
}

impl Synonym {
    /// Empty synonym set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a literal.
    pub fn add_literal(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// Promotes an equal literal to the front; no-op when absent.
    pub fn move_first(&mut self, literal: &Literal) {
        if let Some(idx) = self.literals.iter().position(|l| l == literal) {
            let moved = self.literals.remove(idx);
            self.literals.insert(0, moved);
        }
    }

    /// Literal at `index`.
    pub fn literal(&self, index: usize) -> Option<&Literal> {
        self.literals.get(index)
    }

    /// First literal with the given surface form.
    pub fn literal_with_name(&self, name: &str) -> Option<&Literal> {
        self.literals.iter().find(|l| l.name() == name)
    }

    pub(crate) fn literal_with_name_and_sense(&self, name: &str, sense: u32) -> Option<&Literal> {
        self.literals
            .iter()
            .find(|l| l.name() == name && l.sense() == sense)
    }

    /// Number of literals.
    pub fn literal_size(&self) -> usize {
        self.literals.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// True when an equal `(name, sense)` literal is present.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// True when any literal has this surface form.
    pub fn contains_literal(&self, name: &str) -> bool {
        self.literals.iter().any(|l| l.name() == name)
    }

    /// Removes the first equal literal and returns it.
    pub fn remove_literal(&mut self, literal: &Literal) -> Option<Literal> {
        let idx = self.literals.iter().position(|l| l == literal)?;
        Some(self.literals.remove(idx))
    }

    /// Literals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Literal> {
        self.literals.iter()
    }

    /// Mutable access to the literals. The owning synset id cannot be changed
    /// through this handle.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Literal> {
        self.literals.iter_mut()
    }

    /// Groups literals by their group id.
    ///
    /// Literals without a group (or with group `0`) each form their own
    /// single-element group; grouped literals are collected in the position
    /// of the first member.
    pub fn unique_literals(&self) -> Vec<Synonym> {
        let mut groups: Vec<Synonym> = Vec::new();
        let mut slot_of_group: Vec<(u32, usize)> = Vec::new();
        for literal in &self.literals {
            match literal.group_no().filter(|g| *g != 0) {
                Some(group) => {
                    if let Some((_, slot)) = slot_of_group.iter().find(|(g, _)| *g == group) {
                        groups[*slot].add_literal(literal.clone());
                    } else {
                        slot_of_group.push((group, groups.len()));
                        let mut synonym = Synonym::new();
                        synonym.add_literal(literal.clone());
                        groups.push(synonym);
                    }
                }
                None => {
                    let mut synonym = Synonym::new();
                    synonym.add_literal(literal.clone());
                    groups.push(synonym);
                }
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Synonym {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl fmt::Display for Synonym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for literal in &self.literals {
            write!(f, "{} ", literal.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Synonym {
        let mut synonym = Synonym::new();
        synonym.add_literal(Literal::new("araba", 1, "S"));
        synonym.add_literal(Literal::new("otomobil", 1, "S").with_group(2));
        synonym.add_literal(Literal::new("oto", 1, "S").with_group(2));
        synonym.add_literal(Literal::new("taşıt", 2, "S").with_group(0));
        synonym
    }

    #[test]
    fn move_first_promotes_representative() {
        let mut synonym = sample();
        synonym.move_first(&Literal::new("oto", 1, "other"));
        assert_eq!(synonym.literal(0).map(Literal::name), Some("oto"));
        assert_eq!(synonym.literal_size(), 4);

        synonym.move_first(&Literal::new("oto", 9, "S"));
        assert_eq!(synonym.literal(0).map(Literal::name), Some("oto"));
    }

    #[test]
    fn lookups_and_removal() {
        let mut synonym = sample();
        assert!(synonym.contains_literal("taşıt"));
        assert!(!synonym.contains(&Literal::new("taşıt", 1, "S")));
        assert_eq!(synonym.literal_with_name("otomobil").map(Literal::sense), Some(1));
        let removed = synonym.remove_literal(&Literal::new("araba", 1, "S"));
        assert!(removed.is_some());
        assert_eq!(synonym.literal_size(), 3);
        assert_eq!(synonym.to_string(), "otomobil oto taşıt ");
    }

    #[test]
    fn unique_literals_groups_variants() {
        let groups = sample().unique_literals();
        let sizes: Vec<usize> = groups.iter().map(Synonym::literal_size).collect();
        assert_eq!(sizes, vec![1, 2, 1]);
        assert_eq!(groups[1].literal(1).map(Literal::name), Some("oto"));
    }
}
