pub mod casting;
