use crate::FieldDescriptor;

/// Check a field against its descriptor.
///
/// A required field must contain something other than whitespace. Bounds
/// are only looked at once the required check has passed, and every bound
/// that is set must hold. `NaN` fails any bound.
pub fn validate(descriptor: &FieldDescriptor) -> bool {
    if descriptor.required && descriptor.value.is_blank() {
        return false;
    }

    if !descriptor.has_bounds() {
        return true;
    }

    let measured = descriptor.measure();
    let within_min = descriptor.min.is_none_or(|min| measured >= min);
    let within_max = descriptor.max.is_none_or(|max| measured <= max);

    within_min && within_max
}
