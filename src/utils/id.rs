/// Alphabet used for task identifiers
const TASK_ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates the identifier attached to a submitted task.
///
/// The identifier is 30 characters of uppercase letters and digits produced by
/// `nanoid`, so it can be used as a log correlation key across workers.
///
/// # Examples
/// ```
/// use ibc_client::utils::id::task_id;
/// let id = task_id();
/// assert_eq!(id.len(), 30);
/// ```
pub fn task_id() -> String {
    nanoid::nanoid!(30, &TASK_ID_ALPHABET)
}
