/// Generational handle types
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u32, u32); // (index, generation)

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Handle(index, generation)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    pub fn generation(&self) -> u32 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    #[test]
    fn same_index_different_generation_are_distinct() {
        assert_ne!(Handle::new(3, 0), Handle::new(3, 1));
        assert_eq!(Handle::new(3, 1).index(), 3);
        assert_eq!(Handle::new(3, 1).generation(), 1);
    }
}
