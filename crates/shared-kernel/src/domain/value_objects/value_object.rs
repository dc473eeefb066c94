// crates/shared-kernel/src/domain/value_objects/value_object.rs

use crate::errors::Result;

/// Un value object porte une seule règle de validation de champ.
/// `try_new` l'applique à la construction, `validate` permet de la rejouer.
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;
}
