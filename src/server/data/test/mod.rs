mod character;
mod favorite;
mod planet;
