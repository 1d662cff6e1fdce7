//! Mock collaborators built with `mockall`.
