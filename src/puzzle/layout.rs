/// One position in the rendered grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Bound to one index of the solution.
    Letter(usize),
    /// Word boundary. Holds no state.
    Space,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    slots: Vec<Slot>,
}

impl GridLayout {
    /// `word_breaks` are 1-based: a break of 3 puts a space after the third letter.
    pub fn build(solution_len: usize, word_breaks: &[usize]) -> Self {
        let mut slots = Vec::with_capacity(solution_len + word_breaks.len());
        for i in 0..solution_len {
            slots.push(Slot::Letter(i));
            if word_breaks.contains(&(i + 1)) {
                slots.push(Slot::Space);
            }
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn letter_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Letter(_)))
            .count()
    }

    pub fn space_count(&self) -> usize {
        self.slots.len() - self.letter_count()
    }

    /// Solution indices in slot order.
    pub fn letter_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|s| match s {
            Slot::Letter(i) => Some(*i),
            Slot::Space => None,
        })
    }
}
