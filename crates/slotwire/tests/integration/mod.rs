mod components;
