#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

macro_rules! auto_derived {
    ( $( $item:item )+ ) => {
        $(
            #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
            #[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
            #[derive(Debug, Clone, PartialEq)]
            $item
        )+
    };
}

pub mod v0;
