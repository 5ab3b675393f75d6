/// Blocking, user-facing message.
pub trait Alert {
    fn alert(&mut self, message: &str);
}
