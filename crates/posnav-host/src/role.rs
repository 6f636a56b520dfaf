//! Control Roles
//!
//! The subset of host control roles the position reporter distinguishes.

/// Role of a focused control or one of its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    EditableText,
    Document,
    List,
    ListItem,
    Header,
    ScrollBar,
    Generic,
}

impl Role {
    /// Check if this role is a selectable list entry
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::ListItem)
    }

    /// Check if this role marks a non-item boundary sibling inside a
    /// list (headers and nested lists are excluded from counting)
    pub fn is_list_boundary(&self) -> bool {
        matches!(self, Self::Header | Self::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_roles() {
        assert!(Role::ListItem.is_list_item());
        assert!(!Role::Header.is_list_item());

        assert!(Role::Header.is_list_boundary());
        assert!(Role::List.is_list_boundary());
        assert!(!Role::ListItem.is_list_boundary());
        assert!(!Role::ScrollBar.is_list_boundary());
    }
}
