/// Where a list view draws itself.
pub trait ListSurface {
    /// Called once at construction with the container and list identifiers.
    fn set_identity(&mut self, element_id: &str, list_id: &str);

    fn set_heading(&mut self, heading: &str);

    /// Replace everything currently shown with `items`, in order.
    fn replace_items(&mut self, items: Vec<String>);
}
