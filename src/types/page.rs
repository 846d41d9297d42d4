/// Common view over the paginated listing envelopes.
pub trait Envelope {
    type Item;

    /// 1-based page number.
    fn page(&self) -> u32;
    fn per_page(&self) -> u32;
    /// Total matches, for endpoints that report one.
    fn total_results(&self) -> Option<u64>;
    /// URL of the following page, absent on the last page.
    fn next_page(&self) -> Option<&str>;
    fn prev_page(&self) -> Option<&str>;
    fn items(&self) -> &[Self::Item];
    fn into_items(self) -> Vec<Self::Item>;

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    /// The service never returns more items than the page size it echoes.
    fn is_within_page_size(&self) -> bool {
        self.items().len() <= self.per_page() as usize
    }

    /// The sole item, if the page contains exactly one.
    fn into_single(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        let mut items = self.into_items();
        if items.len() == 1 {
            items.pop()
        } else {
            None
        }
    }
}

macro_rules! impl_envelope {
    ($ty:ty, $item:ty, $field:ident) => {
        impl $crate::types::Envelope for $ty {
            type Item = $item;

            fn page(&self) -> u32 {
                self.page
            }

            fn per_page(&self) -> u32 {
                self.per_page
            }

            fn total_results(&self) -> Option<u64> {
                self.total_results
            }

            fn next_page(&self) -> Option<&str> {
                self.next_page.as_deref()
            }

            fn prev_page(&self) -> Option<&str> {
                self.prev_page.as_deref()
            }

            fn items(&self) -> &[$item] {
                &self.$field
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}

pub(crate) use impl_envelope;
