/// Very internal, implements [crate::types::BoardStorage] and `Display` for a
/// board type that embeds a `Bookkeeping` in a field named `bookkeeping` and
/// provides inherent `token_at` / `put_token` methods for its cells.
macro_rules! impl_board_storage {
    ($type:ty) => {
        impl $crate::types::BoardStorage for $type {
            fn dimension(&self) -> $crate::dimensions::BoardDimension {
                self.bookkeeping.dimension()
            }

            fn players(&self) -> $crate::types::Players {
                self.bookkeeping.players()
            }

            fn cell(&self, pos: $crate::types::Position) -> $crate::types::Token {
                self.token_at(pos)
            }

            fn set_cell(&mut self, pos: $crate::types::Position, token: $crate::types::Token) {
                self.put_token(pos, token)
            }

            fn piece_counts(&self) -> &fxhash::FxHashMap<$crate::types::Token, u32> {
                self.bookkeeping.piece_counts()
            }

            fn piece_counts_mut(&mut self) -> &mut fxhash::FxHashMap<$crate::types::Token, u32> {
                self.bookkeeping.piece_counts_mut()
            }

            fn viable_directions(
                &self,
            ) -> &fxhash::FxHashMap<$crate::types::Token, Vec<$crate::types::Direction>> {
                self.bookkeeping.viable_directions()
            }

            fn viable_directions_mut(
                &mut self,
            ) -> &mut fxhash::FxHashMap<$crate::types::Token, Vec<$crate::types::Direction>> {
                self.bookkeeping.viable_directions_mut()
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::rules::write_board(self, f)
            }
        }
    };
}
